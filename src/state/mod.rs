//! Form state module

mod document;
mod focus;
mod form_state;
mod input;
mod list_editor;
mod organization;

pub use document::*;
pub use focus::*;
pub use form_state::*;
pub use input::*;
pub use organization::Organization;

#[cfg(test)]
pub(crate) use organization::sample_organization;
