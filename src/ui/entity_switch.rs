//! Entity-type switch drawn in the form header

use super::components::render_button;
use crate::app::App;
use crate::state::{EntityType, FocusTarget};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Width of one switch button, borders included
const SWITCH_BUTTON_WIDTH: u16 = 14;

/// Draw the two-way switch between the individual and legal-entity forms
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SWITCH_BUTTON_WIDTH),
            Constraint::Length(SWITCH_BUTTON_WIDTH),
            Constraint::Min(0),
        ])
        .split(area);

    let is_focused = app.focused() == FocusTarget::EntitySwitch;
    for (idx, entity_type) in [EntityType::Individual, EntityType::Legal]
        .into_iter()
        .enumerate()
    {
        render_button(
            frame,
            chunks[idx],
            entity_type.label(),
            app.state.entity_type == entity_type,
            is_focused,
        );
    }
}
