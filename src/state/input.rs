//! Input control rules for text fields
//!
//! These mirror what an input widget does before a value reaches the form:
//! date fields only take `YYYY-MM-DD` characters, capped fields stop growing at
//! their maximum length. The form itself never rejects a value.

use chrono::NaiveDate;

/// Wire format of date fields
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Length of a complete `YYYY-MM-DD` value
const DATE_LEN: usize = 10;

/// The kind of input control backing a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    Date,
}

impl InputKind {
    /// Whether the control accepts this character at all
    pub fn accepts(&self, c: char) -> bool {
        match self {
            InputKind::Text => !c.is_control(),
            InputKind::Date => c.is_ascii_digit() || c == '-',
        }
    }

    /// Effective length cap, combining the control's own cap with the field's
    pub fn effective_max_len(&self, field_max: Option<usize>) -> Option<usize> {
        match (self, field_max) {
            (InputKind::Date, Some(max)) => Some(max.min(DATE_LEN)),
            (InputKind::Date, None) => Some(DATE_LEN),
            (InputKind::Text, max) => max,
        }
    }
}

/// Append a typed character, returning the new value.
///
/// Returns None when the control would ignore the keystroke.
pub fn push_char(value: &str, c: char, kind: InputKind, max_len: Option<usize>) -> Option<String> {
    if !kind.accepts(c) {
        return None;
    }
    if let Some(max) = kind.effective_max_len(max_len) {
        if value.chars().count() >= max {
            return None;
        }
    }
    let mut next = value.to_string();
    next.push(c);
    Some(next)
}

/// Remove the last character, returning the new value
pub fn pop_char(value: &str) -> String {
    let mut next = value.to_string();
    next.pop();
    next
}

/// Parse a date field value, if it is a complete calendar date
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Human-readable form of a date field (`DD.MM.YYYY`), if the value parses
pub fn display_date(value: &str) -> Option<String> {
    parse_date(value).map(|d| d.format("%d.%m.%Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    mod text {
        use super::*;

        #[test]
        fn test_push_char_appends() {
            assert_eq!(
                push_char("Ива", 'н', InputKind::Text, None),
                Some("Иван".to_string())
            );
        }

        #[test]
        fn test_push_char_stops_at_cap() {
            assert_eq!(push_char("4510", '1', InputKind::Text, Some(4)), None);
            assert_eq!(
                push_char("451", '0', InputKind::Text, Some(4)),
                Some("4510".to_string())
            );
        }

        #[test]
        fn test_cap_counts_characters_not_bytes() {
            // Six Cyrillic characters are twelve bytes
            assert_eq!(
                push_char("абвгде", 'ж', InputKind::Text, Some(7)),
                Some("абвгдеж".to_string())
            );
        }

        #[test]
        fn test_control_characters_ignored() {
            assert_eq!(push_char("a", '\n', InputKind::Text, None), None);
        }

        #[test]
        fn test_pop_char() {
            assert_eq!(pop_char("ИНН"), "ИН");
            assert_eq!(pop_char(""), "");
        }
    }

    mod dates {
        use super::*;

        #[test]
        fn test_date_accepts_digits_and_dash() {
            assert!(InputKind::Date.accepts('7'));
            assert!(InputKind::Date.accepts('-'));
            assert!(!InputKind::Date.accepts('a'));
            assert!(!InputKind::Date.accepts('.'));
        }

        #[test]
        fn test_date_capped_at_ten_characters() {
            assert_eq!(push_char("1990-01-01", '1', InputKind::Date, None), None);
            assert_eq!(InputKind::Date.effective_max_len(None), Some(10));
        }

        #[test]
        fn test_parse_date() {
            assert_eq!(
                parse_date("1990-05-17"),
                NaiveDate::from_ymd_opt(1990, 5, 17)
            );
            assert!(parse_date("1990-02-30").is_none());
            assert!(parse_date("1990-05").is_none());
            assert!(parse_date("").is_none());
        }

        #[test]
        fn test_display_date() {
            assert_eq!(display_date("2015-11-03"), Some("03.11.2015".to_string()));
            assert_eq!(display_date("2015-11"), None);
        }
    }
}
