//! Form rendering module
//!
//! This module contains the row builders for the registration form:
//! - `field_renderer`: Field rendering utilities
//! - `individual_form`: Individual-person subform
//! - `legal_form`: Legal-entity subform

mod field_renderer;
mod individual_form;
mod legal_form;

use crate::app::App;
use crate::state::{EntityType, FocusTarget};
use crate::ui::widgets::FormRow;
use field_renderer::{button_row, field_row, section_row, FieldOptions};

/// Rows of the active branch, in display order
pub fn form_rows(app: &App) -> Vec<FormRow> {
    match app.state.entity_type {
        EntityType::Individual => individual_form::rows(app),
        EntityType::Legal => legal_form::rows(app),
    }
}

/// The phone list editor, shared by both branches
fn phone_rows(app: &App) -> Vec<FormRow> {
    let focused = app.focused();
    let state = &app.state;
    let mut rows = vec![section_row("Телефоны")];

    for (index, phone) in state.phones.iter().enumerate() {
        let target = FocusTarget::Phone(index);
        rows.push(field_row(
            target,
            &format!("Телефон {}", index + 1),
            phone,
            FieldOptions {
                placeholder: Some("+7 (___) ___-__-__"),
                ..Default::default()
            },
            focused == target,
        ));
        // No removal control for the last remaining phone
        if state.can_remove_phone() {
            let target = FocusTarget::RemovePhone(index);
            rows.push(button_row(
                target,
                "✕ Удалить телефон",
                focused == target,
                true,
            ));
        }
    }

    rows.push(button_row(
        FocusTarget::AddPhone,
        "+ Добавить телефон",
        focused == FocusTarget::AddPhone,
        false,
    ));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crate::directory::StaticDirectory;
    use crate::state::{DocumentKind, FormEvent};

    fn app(entity_type: EntityType) -> App {
        let config = TuiConfig {
            default_entity_type: Some(entity_type),
            ..Default::default()
        };
        App::new(Box::new(StaticDirectory::embedded().unwrap()), &config)
    }

    fn targets(rows: &[FormRow]) -> Vec<FocusTarget> {
        rows.iter().filter_map(|row| row.target).collect()
    }

    #[test]
    fn test_row_targets_match_focus_order() {
        let mut app = app(EntityType::Individual);
        app.dispatch(FormEvent::AddPhone);
        app.dispatch(FormEvent::AddDocument(DocumentKind::Tin));

        let mut expected = app.focus_targets();
        // The entity switch is drawn in the header, not as a row
        expected.retain(|t| *t != FocusTarget::EntitySwitch);
        assert_eq!(targets(&form_rows(&app)), expected);
    }

    #[test]
    fn test_legal_rows_match_focus_order() {
        let mut app = app(EntityType::Legal);
        app.dispatch(FormEvent::SetSearchQuery("770".to_string()));
        app.dispatch(FormEvent::SelectOrganization(0));

        let mut expected = app.focus_targets();
        expected.retain(|t| *t != FocusTarget::EntitySwitch);
        assert_eq!(targets(&form_rows(&app)), expected);
    }

    #[test]
    fn test_single_phone_has_no_remove_row() {
        let app = app(EntityType::Individual);
        let rows = form_rows(&app);
        assert!(!targets(&rows)
            .iter()
            .any(|t| matches!(t, FocusTarget::RemovePhone(_))));
    }

    #[test]
    fn test_suggestion_rows_only_while_visible() {
        let mut app = app(EntityType::Legal);
        app.dispatch(FormEvent::SetSearchQuery("77".to_string()));
        assert!(form_rows(&app).iter().all(|row| row.suggestion.is_none()));

        app.dispatch(FormEvent::SetSearchQuery("770".to_string()));
        let suggestions: Vec<usize> = form_rows(&app)
            .iter()
            .filter_map(|row| row.suggestion)
            .collect();
        assert_eq!(suggestions, vec![0, 1, 2]);

        app.dispatch(FormEvent::SelectOrganization(2));
        assert!(form_rows(&app).iter().all(|row| row.suggestion.is_none()));
    }
}
