//! Organization reference records

use serde::{Deserialize, Serialize};

/// A legal entity from the organization directory.
///
/// Records are immutable reference data, uniquely identified by `inn`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub short_name: String,
    pub full_name: String,
    pub inn: String,
    pub kpp: String,
    pub ogrn: String,
    pub legal_address: String,
    pub actual_address: String,
    pub main_activity: String,
    #[serde(default)]
    pub phones: Vec<String>,
}

impl Organization {
    /// Whether this record matches a search query.
    ///
    /// The INN is compared as a literal substring, both names case-insensitively.
    /// Callers pass the query already lowercased as `query_lower`.
    pub fn matches(&self, query: &str, query_lower: &str) -> bool {
        self.inn.contains(query)
            || self.short_name.to_lowercase().contains(query_lower)
            || self.full_name.to_lowercase().contains(query_lower)
    }

    /// Read-only fields shown once the record is selected, in display order
    pub fn display_fields(&self) -> [(&'static str, &str); 8] {
        [
            ("Краткое наименование", self.short_name.as_str()),
            ("Полное наименование", self.full_name.as_str()),
            ("ИНН", self.inn.as_str()),
            ("КПП", self.kpp.as_str()),
            ("ОГРН", self.ogrn.as_str()),
            ("Юридический адрес", self.legal_address.as_str()),
            ("Фактический адрес", self.actual_address.as_str()),
            ("Основной вид деятельности", self.main_activity.as_str()),
        ]
    }
}

#[cfg(test)]
pub(crate) fn sample_organization(inn: &str, short_name: &str, phones: &[&str]) -> Organization {
    Organization {
        short_name: short_name.to_string(),
        full_name: format!("ОБЩЕСТВО С ОГРАНИЧЕННОЙ ОТВЕТСТВЕННОСТЬЮ {short_name}"),
        inn: inn.to_string(),
        kpp: "770101001".to_string(),
        ogrn: "1027700123456".to_string(),
        legal_address: "101000, ГОРОД МОСКВА".to_string(),
        actual_address: "101000, ГОРОД МОСКВА, ОФИС 1".to_string(),
        main_activity: "62.01 Разработка программного обеспечения".to_string(),
        phones: phones.iter().map(|p| p.to_string()).collect(),
    }
}
