//! Layout components (header, body, status bar)

use super::components::BUTTON_HEIGHT;
use crate::app::App;
use crate::state::FocusTarget;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header, form body and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Entity switch
            Constraint::Min(0),                // Form body
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.state.entity_type.label()),
        Style::default().fg(Color::Cyan),
    )];

    if app.show_key_hints {
        spans.push(Span::styled(
            get_focus_hints(app),
            Style::default().fg(Color::Gray),
        ));
    }

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: area.height.min(1),
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the focused element
fn get_focus_hints(app: &App) -> &'static str {
    let focused = app.focused();
    if app.navigating_suggestions() {
        "↑/↓:choose  Enter:select  Esc:close"
    } else if focused == FocusTarget::EntitySwitch {
        "←/→:switch  Tab:next"
    } else if focused.is_button() {
        "Enter:activate  Tab:next  Shift+Tab:prev"
    } else {
        "type:edit  Backspace:delete  Tab:next  Shift+Tab:prev"
    }
}
