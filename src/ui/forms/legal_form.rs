//! Legal-entity subform rows: organization search and the selected record

use super::field_renderer::{
    field_row, readonly_row, section_row, spacer_row, suggestion_row, FieldOptions,
};
use super::phone_rows;
use crate::app::App;
use crate::state::FocusTarget;
use crate::ui::widgets::FormRow;

/// Build the rows of the legal-entity branch
pub fn rows(app: &App) -> Vec<FormRow> {
    let focused = app.focused();
    let state = &app.state;
    let mut rows = vec![section_row("Поиск по ИНН или названию организации")];

    rows.push(field_row(
        FocusTarget::Search,
        "Поиск",
        &state.search_query,
        FieldOptions {
            placeholder: Some("Введите ИНН или название организации"),
            ..Default::default()
        },
        focused == FocusTarget::Search,
    ));

    if state.suggestions_visible() {
        let highlight = app.navigating_suggestions().then_some(app.suggestion_index);
        for (index, org) in state.search_results.iter().enumerate() {
            rows.push(suggestion_row(index, org, highlight == Some(index)));
        }
    }

    if let Some(org) = &state.organization {
        rows.push(spacer_row());
        for (label, value) in org.display_fields() {
            rows.push(readonly_row(label, value));
        }
        rows.push(spacer_row());
        rows.extend(phone_rows(app));
    }

    rows
}
