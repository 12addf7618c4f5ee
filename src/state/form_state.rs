//! The registration form aggregate and its reducer

use super::document::{Document, DocumentField, DocumentKind};
use super::list_editor::{appended, removed_at, replaced_at};
use super::organization::Organization;
use crate::directory::{OrganizationLookup, MIN_QUERY_CHARS};
use serde::{Deserialize, Serialize};

/// Which kind of sole executive body is being registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    #[default]
    Individual,
    Legal,
}

impl EntityType {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Individual => Self::Legal,
            Self::Legal => Self::Individual,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Individual => "Физ. лицо",
            Self::Legal => "Юр. лицо",
        }
    }
}

/// Free-text fields of the individual signatory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonField {
    LastName,
    FirstName,
    MiddleName,
    BirthDate,
    Position,
}

impl PersonField {
    pub const ALL: [PersonField; 5] = [
        PersonField::LastName,
        PersonField::FirstName,
        PersonField::MiddleName,
        PersonField::BirthDate,
        PersonField::Position,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::LastName => "Фамилия",
            Self::FirstName => "Имя",
            Self::MiddleName => "Отчество",
            Self::BirthDate => "Дата рождения",
            Self::Position => "Должность",
        }
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Position => Some("Например: Генеральный директор"),
            _ => None,
        }
    }

    pub fn is_date(&self) -> bool {
        matches!(self, Self::BirthDate)
    }
}

/// Personal data of the individual signatory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub birth_date: String,
    pub position: String,
}

impl Person {
    pub fn get(&self, field: PersonField) -> &str {
        match field {
            PersonField::LastName => &self.last_name,
            PersonField::FirstName => &self.first_name,
            PersonField::MiddleName => &self.middle_name,
            PersonField::BirthDate => &self.birth_date,
            PersonField::Position => &self.position,
        }
    }

    fn with(&self, field: PersonField, value: String) -> Self {
        let mut next = self.clone();
        match field {
            PersonField::LastName => next.last_name = value,
            PersonField::FirstName => next.first_name = value,
            PersonField::MiddleName => next.middle_name = value,
            PersonField::BirthDate => next.birth_date = value,
            PersonField::Position => next.position = value,
        }
        next
    }
}

/// Discrete input events the form reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    SetEntityType(EntityType),
    SetPersonField(PersonField, String),
    SetSearchQuery(String),
    /// Pick an entry of the current search results by position
    SelectOrganization(usize),
    CloseSuggestions,
    AddPhone,
    RemovePhone(usize),
    SetPhone(usize, String),
    AddDocument(DocumentKind),
    RemoveDocument(usize),
    SetDocumentField(usize, DocumentField, String),
}

/// Complete state of one form session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub entity_type: EntityType,
    pub person: Person,
    /// Always starts with the passport; at most one document per kind
    pub documents: Vec<Document>,
    /// Shared by both branches; never empty
    pub phones: Vec<String>,
    pub organization: Option<Organization>,
    pub search_query: String,
    pub search_results: Vec<Organization>,
    suggestions_open: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(EntityType::default())
    }
}

impl FormState {
    pub fn new(entity_type: EntityType) -> Self {
        Self {
            entity_type,
            person: Person::default(),
            documents: vec![Document::new(DocumentKind::Passport)],
            phones: vec![String::new()],
            organization: None,
            search_query: String::new(),
            search_results: Vec::new(),
            suggestions_open: false,
        }
    }

    /// Apply one event, producing the next state.
    ///
    /// Every event is total: requests that would break an invariant leave the
    /// state unchanged.
    pub fn reduce(self, event: FormEvent, lookup: &dyn OrganizationLookup) -> Self {
        tracing::debug!(?event, "reducing form event");

        match event {
            FormEvent::SetEntityType(entity_type) => Self {
                entity_type,
                ..self
            },
            FormEvent::SetPersonField(field, value) => Self {
                person: self.person.with(field, value),
                ..self
            },
            FormEvent::SetSearchQuery(query) => {
                let search_results = if query.chars().count() >= MIN_QUERY_CHARS {
                    lookup.lookup(&query)
                } else {
                    Vec::new()
                };
                Self {
                    suggestions_open: !search_results.is_empty(),
                    search_query: query,
                    search_results,
                    ..self
                }
            }
            FormEvent::SelectOrganization(index) => {
                let Some(org) = self.search_results.get(index).cloned() else {
                    return self;
                };
                tracing::info!(inn = %org.inn, "organization selected");
                let phones = if org.phones.is_empty() {
                    vec![String::new()]
                } else {
                    org.phones.clone()
                };
                Self {
                    search_query: org.short_name.clone(),
                    phones,
                    organization: Some(org),
                    suggestions_open: false,
                    ..self
                }
            }
            FormEvent::CloseSuggestions => Self {
                suggestions_open: false,
                ..self
            },
            FormEvent::AddPhone => Self {
                phones: appended(&self.phones, String::new()),
                ..self
            },
            FormEvent::RemovePhone(index) => {
                if !self.can_remove_phone() || index >= self.phones.len() {
                    return self;
                }
                Self {
                    phones: removed_at(&self.phones, index),
                    ..self
                }
            }
            FormEvent::SetPhone(index, value) => Self {
                phones: replaced_at(&self.phones, index, value),
                ..self
            },
            FormEvent::AddDocument(kind) => {
                if !self.can_add_document(kind) {
                    return self;
                }
                Self {
                    documents: appended(&self.documents, Document::new(kind)),
                    ..self
                }
            }
            FormEvent::RemoveDocument(index) => {
                if !self.can_remove_document(index) {
                    return self;
                }
                Self {
                    documents: removed_at(&self.documents, index),
                    ..self
                }
            }
            FormEvent::SetDocumentField(index, field, value) => {
                let Some(updated) = self
                    .documents
                    .get(index)
                    .and_then(|doc| doc.with_field(field, &value))
                else {
                    return self;
                };
                Self {
                    documents: replaced_at(&self.documents, index, updated),
                    ..self
                }
            }
        }
    }

    /// Whether the suggestion panel is shown
    pub fn suggestions_visible(&self) -> bool {
        self.suggestions_open && !self.search_results.is_empty()
    }

    /// A phone can be removed while more than one remains
    pub fn can_remove_phone(&self) -> bool {
        self.phones.len() > 1
    }

    pub fn has_document(&self, kind: DocumentKind) -> bool {
        self.documents.iter().any(|doc| doc.kind() == kind)
    }

    /// Only SNILS and TIN can be added, each at most once
    pub fn can_add_document(&self, kind: DocumentKind) -> bool {
        DocumentKind::ADDABLE.contains(&kind) && !self.has_document(kind)
    }

    /// Kinds offered by the "add document" buttons, recomputed from the live list
    pub fn available_document_kinds(&self) -> Vec<DocumentKind> {
        DocumentKind::ADDABLE
            .into_iter()
            .filter(|kind| self.can_add_document(*kind))
            .collect()
    }

    /// The passport is permanent; other documents can be removed
    pub fn can_remove_document(&self, index: usize) -> bool {
        self.documents
            .get(index)
            .is_some_and(|doc| doc.kind() != DocumentKind::Passport)
    }
}
