//! Compiled-in organization directory

use super::traits::OrganizationLookup;
use crate::state::Organization;
use std::collections::HashSet;
use thiserror::Error;

/// Directory records shipped with the binary
const EMBEDDED_DIRECTORY: &str = include_str!("../../assets/organizations.json");

/// Queries shorter than this (in characters) never match
pub const MIN_QUERY_CHARS: usize = 3;

/// Errors raised while loading a directory
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("failed to parse organization directory: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate INN {0} in organization directory")]
    DuplicateInn(String),
}

/// Fixed, in-memory list of organizations
#[derive(Debug, Clone)]
pub struct StaticDirectory {
    organizations: Vec<Organization>,
}

impl StaticDirectory {
    /// Load the directory compiled into the binary
    pub fn embedded() -> Result<Self, DirectoryError> {
        Self::from_json(EMBEDDED_DIRECTORY)
    }

    /// Parse a JSON array of organization records
    pub fn from_json(json: &str) -> Result<Self, DirectoryError> {
        let organizations: Vec<Organization> = serde_json::from_str(json)?;
        Self::from_organizations(organizations)
    }

    /// Build a directory, rejecting records that share an INN
    pub fn from_organizations(organizations: Vec<Organization>) -> Result<Self, DirectoryError> {
        let mut seen = HashSet::new();
        for org in &organizations {
            if !seen.insert(org.inn.as_str()) {
                return Err(DirectoryError::DuplicateInn(org.inn.clone()));
            }
        }
        Ok(Self { organizations })
    }

    #[cfg(test)]
    pub fn organizations(&self) -> &[Organization] {
        &self.organizations
    }

    pub fn len(&self) -> usize {
        self.organizations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.organizations.is_empty()
    }
}

impl OrganizationLookup for StaticDirectory {
    fn lookup(&self, query: &str) -> Vec<Organization> {
        if query.chars().count() < MIN_QUERY_CHARS {
            return Vec::new();
        }

        let query_lower = query.to_lowercase();
        self.organizations
            .iter()
            .filter(|org| org.matches(query, &query_lower))
            .cloned()
            .collect()
    }
}
