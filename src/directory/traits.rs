//! Trait abstraction for organization lookup to enable substitution and mocking

use crate::state::Organization;

/// Read-only source of organization records.
///
/// The compiled-in [`StaticDirectory`](super::StaticDirectory) implements this;
/// a registry-backed lookup can replace it without touching the form logic.
#[cfg_attr(test, mockall::automock)]
pub trait OrganizationLookup {
    /// Records matching `query`, in directory order.
    ///
    /// Queries shorter than [`MIN_QUERY_CHARS`](super::MIN_QUERY_CHARS) characters
    /// match nothing.
    fn lookup(&self, query: &str) -> Vec<Organization>;
}
