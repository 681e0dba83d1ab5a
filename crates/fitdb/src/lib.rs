//! ## Crate layout
//! - `core`: identifiers, fragments, validators, descriptors, columns, and
//!   the type schema registry.
//! - `store`: the storage import boundary and an in-memory importer.
//! - `seed`: built-in seed data sets.
//! - `backup`: backup documents and restore.
//!
//! The `prelude` module carries the vocabulary most callers need.

pub use fitdb_core as core;

pub mod backup;
pub mod seed;
pub mod store;

use thiserror::Error as ThisError;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use fitdb_core::APP_NAME;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        backup::{BackupData, RestoreReport, restore},
        seed::{SeedSet, seed},
        store::{MemoryStore, RecordImporter},
    };
    pub use fitdb_core::prelude::*;
}

///
/// Error
///

#[remain::sorted]
#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Backup(#[from] backup::BackupError),

    #[error(transparent)]
    Core(#[from] fitdb_core::Error),

    #[error(transparent)]
    Seed(#[from] seed::SeedError),

    #[error(transparent)]
    Store(#[from] store::StoreError),
}

impl From<fitdb_core::schema::IntegrityErrors> for Error {
    fn from(err: fitdb_core::schema::IntegrityErrors) -> Self {
        Self::Core(err.into())
    }
}

impl From<fitdb_core::validate::ValidationErrors> for Error {
    fn from(err: fitdb_core::validate::ValidationErrors) -> Self {
        Self::Core(err.into())
    }
}
