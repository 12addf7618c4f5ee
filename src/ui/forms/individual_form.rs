//! Individual-person subform rows

use super::field_renderer::{button_row, field_row, section_row, spacer_row, FieldOptions};
use super::phone_rows;
use crate::app::App;
use crate::state::{FocusTarget, PersonField};
use crate::ui::widgets::FormRow;

/// Build the rows of the individual-person branch
pub fn rows(app: &App) -> Vec<FormRow> {
    let focused = app.focused();
    let state = &app.state;
    let mut rows = Vec::new();

    for field in PersonField::ALL {
        let target = FocusTarget::Person(field);
        rows.push(field_row(
            target,
            field.label(),
            state.person.get(field),
            FieldOptions {
                placeholder: field.placeholder(),
                is_date: field.is_date(),
                ..Default::default()
            },
            focused == target,
        ));
    }

    rows.push(spacer_row());
    rows.extend(phone_rows(app));

    rows.push(spacer_row());
    rows.push(section_row("Документы"));
    for (index, doc) in state.documents.iter().enumerate() {
        let kind = doc.kind();
        rows.push(section_row(&format!("  {}", kind.label())));
        for field in kind.fields() {
            let target = FocusTarget::DocumentField(index, *field);
            rows.push(field_row(
                target,
                field.label(kind),
                doc.field(*field).unwrap_or_default(),
                FieldOptions {
                    placeholder: field.placeholder(kind),
                    max_len: field.max_len(kind),
                    is_date: field.is_date(),
                    indent: 4,
                },
                focused == target,
            ));
        }
        if state.can_remove_document(index) {
            let target = FocusTarget::RemoveDocument(index);
            rows.push(button_row(
                target,
                &format!("✕ Удалить {}", kind.label()),
                focused == target,
                true,
            ));
        }
    }

    // Offered only for kinds not yet in the list
    for kind in state.available_document_kinds() {
        let target = FocusTarget::AddDocument(kind);
        rows.push(button_row(
            target,
            &format!("+ Добавить {}", kind.label()),
            focused == target,
            false,
        ));
    }

    rows
}
