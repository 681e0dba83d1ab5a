//! Closed identifier sets shared by every record shape.
//!
//! Each identifier carries one stable slug. Slugs are what records, storage
//! tables, and serialized backups use; the Rust variants are what the rest of
//! the crate matches on.

mod field;
mod input;
mod record_type;

pub use field::*;
pub use input::*;
pub use record_type::*;

use thiserror::Error as ThisError;

///
/// UnknownSlug
/// Raised when parsing a slug that no variant of the target set declares.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownSlug {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownSlug {
    #[must_use]
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

///
/// TESTS
///
