//! Reusable UI widget helpers

use crate::state::FocusTarget;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, List, ListItem, ListState},
    Frame,
};

/// One rendered line of the form body
#[derive(Debug, Clone)]
pub struct FormRow {
    pub line: Line<'static>,
    /// Element this row edits or activates, if any
    pub target: Option<FocusTarget>,
    /// Position in the search results, for suggestion rows
    pub suggestion: Option<usize>,
}

impl FormRow {
    pub fn new(line: Line<'static>, target: Option<FocusTarget>) -> Self {
        Self {
            line,
            target,
            suggestion: None,
        }
    }

    pub fn suggestion(line: Line<'static>, index: usize) -> Self {
        Self {
            line,
            target: None,
            suggestion: Some(index),
        }
    }
}

/// Render form rows as a list that keeps the selected row visible.
///
/// # Example
/// ```ignore
/// render_form_rows(frame, area, rows, block, selected_row);
/// ```
pub fn render_form_rows(
    frame: &mut Frame,
    area: Rect,
    rows: Vec<FormRow>,
    block: Block,
    selected_index: Option<usize>,
) {
    let items: Vec<ListItem> = rows.into_iter().map(|row| ListItem::new(row.line)).collect();
    let list = List::new(items)
        .block(block)
        .highlight_symbol("▸ ")
        .highlight_style(Style::default().bg(Color::Black));

    let mut list_state = ListState::default().with_selected(selected_index);
    frame.render_stateful_widget(list, area, &mut list_state);
}
