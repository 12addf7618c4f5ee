//! Identity documents of an individual signatory

/// The fixed set of document kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Passport,
    Snils,
    Tin,
}

impl DocumentKind {
    /// Kinds that can be added after the form is created, in button order
    pub const ADDABLE: [DocumentKind; 2] = [DocumentKind::Snils, DocumentKind::Tin];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Passport => "Паспорт РФ",
            Self::Snils => "СНИЛС",
            Self::Tin => "ИНН",
        }
    }

    /// Fields editable for this kind, in display order
    pub fn fields(&self) -> &'static [DocumentField] {
        match self {
            Self::Passport => &[
                DocumentField::Series,
                DocumentField::Number,
                DocumentField::IssueDate,
                DocumentField::DepartmentCode,
                DocumentField::IssuedBy,
            ],
            Self::Snils | Self::Tin => &[DocumentField::Number],
        }
    }

    pub fn has_field(&self, field: DocumentField) -> bool {
        self.fields().contains(&field)
    }
}

/// Field keys a document may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentField {
    Series,
    Number,
    IssueDate,
    DepartmentCode,
    IssuedBy,
}

impl DocumentField {
    pub fn label(&self, kind: DocumentKind) -> &'static str {
        match (self, kind) {
            (Self::Series, _) => "Серия",
            (Self::Number, DocumentKind::Snils) => "Номер СНИЛС",
            (Self::Number, DocumentKind::Tin) => "Номер ИНН",
            (Self::Number, DocumentKind::Passport) => "Номер",
            (Self::IssueDate, _) => "Дата выдачи",
            (Self::DepartmentCode, _) => "Код подразделения",
            (Self::IssuedBy, _) => "Кем выдан",
        }
    }

    pub fn placeholder(&self, kind: DocumentKind) -> Option<&'static str> {
        match (self, kind) {
            (Self::DepartmentCode, _) => Some("000-000"),
            (Self::Number, DocumentKind::Snils) => Some("000-000-000 00"),
            (Self::Number, DocumentKind::Tin) => Some("000000000000"),
            _ => None,
        }
    }

    /// Maximum length in characters, if the field is capped
    pub fn max_len(&self, kind: DocumentKind) -> Option<usize> {
        match (self, kind) {
            (Self::Series, _) => Some(4),
            (Self::Number, DocumentKind::Passport) => Some(6),
            (Self::Number, DocumentKind::Snils) => Some(14),
            (Self::Number, DocumentKind::Tin) => Some(12),
            (Self::DepartmentCode, _) => Some(7),
            (Self::IssueDate, _) | (Self::IssuedBy, _) => None,
        }
    }

    pub fn is_date(&self) -> bool {
        matches!(self, Self::IssueDate)
    }
}

/// Passport of a citizen of the Russian Federation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Passport {
    pub series: String,
    pub number: String,
    pub issue_date: String,
    pub department_code: String,
    pub issued_by: String,
}

/// A document attached to the individual signatory.
///
/// Each variant carries only its own fields; the kind never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    Passport(Passport),
    Snils { number: String },
    Tin { number: String },
}

impl Document {
    /// Create an empty document of the given kind
    pub fn new(kind: DocumentKind) -> Self {
        match kind {
            DocumentKind::Passport => Document::Passport(Passport::default()),
            DocumentKind::Snils => Document::Snils {
                number: String::new(),
            },
            DocumentKind::Tin => Document::Tin {
                number: String::new(),
            },
        }
    }

    pub fn kind(&self) -> DocumentKind {
        match self {
            Document::Passport(_) => DocumentKind::Passport,
            Document::Snils { .. } => DocumentKind::Snils,
            Document::Tin { .. } => DocumentKind::Tin,
        }
    }

    /// Get a field value (None when the kind has no such field)
    pub fn field(&self, field: DocumentField) -> Option<&str> {
        match (self, field) {
            (Document::Passport(p), DocumentField::Series) => Some(p.series.as_str()),
            (Document::Passport(p), DocumentField::Number) => Some(p.number.as_str()),
            (Document::Passport(p), DocumentField::IssueDate) => Some(p.issue_date.as_str()),
            (Document::Passport(p), DocumentField::DepartmentCode) => Some(p.department_code.as_str()),
            (Document::Passport(p), DocumentField::IssuedBy) => Some(p.issued_by.as_str()),
            (Document::Snils { number }, DocumentField::Number) => Some(number.as_str()),
            (Document::Tin { number }, DocumentField::Number) => Some(number.as_str()),
            _ => None,
        }
    }

    /// Return a copy with one field replaced, truncated to the field's length cap.
    ///
    /// Returns None when the field is not recognized for this kind.
    pub fn with_field(&self, field: DocumentField, value: &str) -> Option<Document> {
        if !self.kind().has_field(field) {
            return None;
        }
        let value = truncate_chars(value, field.max_len(self.kind()));
        let mut updated = self.clone();
        let slot = match (&mut updated, field) {
            (Document::Passport(p), DocumentField::Series) => &mut p.series,
            (Document::Passport(p), DocumentField::Number) => &mut p.number,
            (Document::Passport(p), DocumentField::IssueDate) => &mut p.issue_date,
            (Document::Passport(p), DocumentField::DepartmentCode) => &mut p.department_code,
            (Document::Passport(p), DocumentField::IssuedBy) => &mut p.issued_by,
            (Document::Snils { number }, DocumentField::Number) => number,
            (Document::Tin { number }, DocumentField::Number) => number,
            _ => return None,
        };
        *slot = value;
        Some(updated)
    }
}

/// Cut a string to at most `max` characters
pub fn truncate_chars(value: &str, max: Option<usize>) -> String {
    match max {
        Some(max) => value.chars().take(max).collect(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod kinds {
        use super::*;

        #[test]
        fn test_passport_field_set() {
            assert_eq!(
                DocumentKind::Passport.fields(),
                &[
                    DocumentField::Series,
                    DocumentField::Number,
                    DocumentField::IssueDate,
                    DocumentField::DepartmentCode,
                    DocumentField::IssuedBy,
                ]
            );
        }

        #[test]
        fn test_snils_and_tin_only_have_number() {
            for kind in DocumentKind::ADDABLE {
                assert_eq!(kind.fields(), &[DocumentField::Number]);
                assert!(!kind.has_field(DocumentField::Series));
            }
        }

        #[test]
        fn test_labels() {
            assert_eq!(DocumentKind::Passport.label(), "Паспорт РФ");
            assert_eq!(DocumentKind::Snils.label(), "СНИЛС");
            assert_eq!(DocumentKind::Tin.label(), "ИНН");
            assert_eq!(
                DocumentField::Number.label(DocumentKind::Snils),
                "Номер СНИЛС"
            );
        }

        #[test]
        fn test_length_caps() {
            assert_eq!(DocumentField::Series.max_len(DocumentKind::Passport), Some(4));
            assert_eq!(DocumentField::Number.max_len(DocumentKind::Passport), Some(6));
            assert_eq!(
                DocumentField::DepartmentCode.max_len(DocumentKind::Passport),
                Some(7)
            );
            assert_eq!(DocumentField::Number.max_len(DocumentKind::Snils), Some(14));
            assert_eq!(DocumentField::Number.max_len(DocumentKind::Tin), Some(12));
            assert_eq!(DocumentField::IssuedBy.max_len(DocumentKind::Passport), None);
        }
    }

    mod fields {
        use super::*;

        #[test]
        fn test_new_documents_are_empty() {
            let doc = Document::new(DocumentKind::Passport);
            assert_eq!(doc.kind(), DocumentKind::Passport);
            assert_eq!(doc.field(DocumentField::Series), Some(""));
            assert_eq!(Document::new(DocumentKind::Tin).field(DocumentField::Number), Some(""));
        }

        #[test]
        fn test_with_field_replaces_only_that_field() {
            let doc = Document::new(DocumentKind::Passport)
                .with_field(DocumentField::Series, "4510")
                .unwrap();
            let doc = doc.with_field(DocumentField::Number, "123456").unwrap();
            assert_eq!(doc.field(DocumentField::Series), Some("4510"));
            assert_eq!(doc.field(DocumentField::Number), Some("123456"));
            assert_eq!(doc.field(DocumentField::IssuedBy), Some(""));
        }

        #[test]
        fn test_with_field_truncates_to_cap() {
            let doc = Document::new(DocumentKind::Passport)
                .with_field(DocumentField::Series, "451099")
                .unwrap();
            assert_eq!(doc.field(DocumentField::Series), Some("4510"));

            let snils = Document::new(DocumentKind::Snils)
                .with_field(DocumentField::Number, "123-456-789 01234")
                .unwrap();
            assert_eq!(snils.field(DocumentField::Number), Some("123-456-789 01"));
        }

        #[test]
        fn test_unrecognized_field_is_rejected() {
            let snils = Document::new(DocumentKind::Snils);
            assert!(snils.with_field(DocumentField::Series, "1234").is_none());
            assert!(snils.field(DocumentField::IssuedBy).is_none());
        }

        #[test]
        fn test_truncate_counts_characters() {
            assert_eq!(truncate_chars("абвгд", Some(3)), "абв");
            assert_eq!(truncate_chars("абв", None), "абв");
        }
    }
}
