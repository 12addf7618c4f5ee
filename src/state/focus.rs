//! Keyboard focus over the visible form elements
//!
//! The set of focusable elements is derived from the form on every call, so
//! buttons appear and disappear together with the rows they act on.

use super::document::{DocumentField, DocumentKind};
use super::form_state::{EntityType, FormState, PersonField};
use super::input::InputKind;

/// One focusable element of the rendered form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    EntitySwitch,
    Person(PersonField),
    Phone(usize),
    RemovePhone(usize),
    AddPhone,
    DocumentField(usize, DocumentField),
    RemoveDocument(usize),
    AddDocument(DocumentKind),
    Search,
}

impl FocusTarget {
    /// Whether typing edits this element
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            Self::Person(_) | Self::Phone(_) | Self::DocumentField(..) | Self::Search
        )
    }

    pub fn is_button(&self) -> bool {
        matches!(
            self,
            Self::RemovePhone(_) | Self::AddPhone | Self::RemoveDocument(_) | Self::AddDocument(_)
        )
    }

    pub fn input_kind(&self) -> InputKind {
        match self {
            Self::Person(field) if field.is_date() => InputKind::Date,
            Self::DocumentField(_, field) if field.is_date() => InputKind::Date,
            _ => InputKind::Text,
        }
    }
}

/// Focusable elements in display order for the active branch
pub fn focus_targets(state: &FormState) -> Vec<FocusTarget> {
    let mut targets = vec![FocusTarget::EntitySwitch];

    match state.entity_type {
        EntityType::Individual => {
            targets.extend(PersonField::ALL.into_iter().map(FocusTarget::Person));
            push_phone_targets(state, &mut targets);
            for (index, doc) in state.documents.iter().enumerate() {
                targets.extend(
                    doc.kind()
                        .fields()
                        .iter()
                        .map(|field| FocusTarget::DocumentField(index, *field)),
                );
                if state.can_remove_document(index) {
                    targets.push(FocusTarget::RemoveDocument(index));
                }
            }
            targets.extend(
                state
                    .available_document_kinds()
                    .into_iter()
                    .map(FocusTarget::AddDocument),
            );
        }
        EntityType::Legal => {
            targets.push(FocusTarget::Search);
            if state.organization.is_some() {
                push_phone_targets(state, &mut targets);
            }
        }
    }

    targets
}

fn push_phone_targets(state: &FormState, targets: &mut Vec<FocusTarget>) {
    let removable = state.can_remove_phone();
    for index in 0..state.phones.len() {
        targets.push(FocusTarget::Phone(index));
        if removable {
            targets.push(FocusTarget::RemovePhone(index));
        }
    }
    targets.push(FocusTarget::AddPhone);
}
