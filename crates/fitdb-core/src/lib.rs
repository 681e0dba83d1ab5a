//! Core runtime for fitdb: record identifiers, validator fragments, composite
//! record validators, field and column descriptors, and the type schema
//! registry that ties them together.
#![warn(unreachable_pub)]

#[macro_use]
mod macros;

// public exports are one module level down
pub mod column;
pub mod field_props;
pub mod fragment;
pub mod obs;
pub mod record;
pub mod relation;
pub mod schema;
pub mod types;
pub mod validate;

// test
#[cfg(test)]
pub(crate) mod test_support;

use thiserror::Error as ThisError;

///
/// CONSTANTS
///

/// Display name of the application that owns the datastore.
pub const APP_NAME: &str = "Fitness Tracker";

/// Minimum length (in characters) of a parent record name.
pub const MIN_NAME_LEN: usize = 1;

/// Maximum length (in characters) of a parent record name.
pub const MAX_NAME_LEN: usize = 50;

/// Maximum length (in characters) of description and note text areas.
pub const MAX_TEXT_AREA_LEN: usize = 500;

/// Character budget for free text cells in table views.
pub const TEXT_CELL_BUDGET: usize = 40;

/// Character budget for identifier cells in table views.
pub const ID_CELL_BUDGET: usize = 8;

/// Largest integer that survives a round trip through an IEEE-754 double.
///
/// Records are shared with storage engines that keep numbers as doubles, so
/// numeric fragments never accept anything above this bound.
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Upper bound for each element of a body height/weight pair.
pub const MAX_HEIGHT_WEIGHT: f64 = 1_000.0;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, sinks, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        column::TableColumn,
        field_props::{FieldProps, InputBinding},
        record::Record,
        schema::{Registry, TypeSchema},
        types::{
            Action, ExerciseInput, Field, Group, LogRetention, MeasurementInput, RecordType,
            SettingKey, Severity,
        },
    };
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    IntegrityErrors(#[from] schema::IntegrityErrors),

    #[error(transparent)]
    UnknownSlug(#[from] types::UnknownSlug),

    #[error(transparent)]
    ValidationErrors(#[from] validate::ValidationErrors),
}
