//! Organization directory: the lookup collaborator behind the search box

mod static_directory;
mod traits;

pub use static_directory::{StaticDirectory, MIN_QUERY_CHARS};
pub use traits::OrganizationLookup;

#[cfg(test)]
pub use traits::MockOrganizationLookup;
