//! UI module for rendering the TUI

mod components;
mod entity_switch;
mod forms;
mod layout;
mod widgets;

use crate::app::App;
use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Form title shown on the body border
const FORM_TITLE: &str = " Единоличный исполнительный орган ";

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, body_area, status_area) = layout::create_layout(frame.area());

    entity_switch::draw(frame, header_area, app);

    let rows = forms::form_rows(app);
    let selected = if app.navigating_suggestions() {
        rows.iter()
            .position(|row| row.suggestion == Some(app.suggestion_index))
    } else {
        let focused = app.focused();
        rows.iter().position(|row| row.target == Some(focused))
    };

    let block = Block::default()
        .title(FORM_TITLE)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    widgets::render_form_rows(frame, body_area, rows, block, selected);

    layout::draw_status_bar(frame, status_area, app);
}
