//! Composite record validators.
//!
//! A composite is the ordered merge of rule groups (core, parent or child,
//! then type-specific). Each declared key is checked by the fragment of its
//! field descriptor, and any key outside the merge set is rejected by name.

pub mod rules;

use crate::{
    field_props,
    record::Record,
    types::{Field, RecordType},
};
use derive_more::{Deref, IntoIterator};
use rules::Slot;
use std::{collections::HashSet, fmt::Write as _};
use thiserror::Error as ThisError;

///
/// FieldError
///
/// One rejected key. Every variant names the offending key so callers can
/// attach the message to the right input.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum FieldError {
    #[error("{field}: {message} ({detail})")]
    Invalid {
        field: Field,
        message: &'static str,
        detail: String,
    },

    #[error("{field}: no {target} record with id '{id}'")]
    Reference {
        field: Field,
        target: RecordType,
        id: String,
    },

    #[error("unknown field '{key}'")]
    Unknown { key: String },
}

impl FieldError {
    /// Record key this error is attributed to.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Invalid { field, .. } | Self::Reference { field, .. } => field.as_str(),
            Self::Unknown { key } => key,
        }
    }

    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown { .. })
    }
}

///
/// ValidationErrors
/// Every field error raised by one record, in rule order.
///

#[derive(Clone, Debug, Deref, Eq, IntoIterator, PartialEq, ThisError)]
#[error("{}", render(.0))]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    #[must_use]
    pub const fn new(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }

    /// First error attributed to `key`, if any.
    #[must_use]
    pub fn for_key(&self, key: &str) -> Option<&FieldError> {
        self.0.iter().find(|e| e.key() == key)
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<FieldError> {
        self.0
    }
}

fn render(errors: &[FieldError]) -> String {
    let mut out = format!("record failed validation ({} errors)", errors.len());
    for err in errors {
        let _ = write!(out, "; {err}");
    }

    out
}

///
/// RecordValidator
///
/// Composite validator for one record type.
/// Stateless once built; any number of validations may share it.
///

#[derive(Clone, Debug)]
pub struct RecordValidator {
    record_type: RecordType,
    slots: Vec<Slot>,
}

impl RecordValidator {
    /// Merge rule groups in order.
    #[must_use]
    pub fn merge(record_type: RecordType, groups: &[&[Slot]]) -> Self {
        let slots = groups.iter().flat_map(|g| g.iter().copied()).collect();

        Self { record_type, slots }
    }

    /// Composite for a record type from the standard rule groups.
    #[must_use]
    pub fn for_type(record_type: RecordType) -> Self {
        Self::merge(record_type, rules::groups_for(record_type))
    }

    #[must_use]
    pub const fn record_type(&self) -> RecordType {
        self.record_type
    }

    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Declared fields, in merge order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.slots.iter().map(|s| s.field)
    }

    #[must_use]
    pub fn declares(&self, field: Field) -> bool {
        self.slots.iter().any(|s| s.field == field)
    }

    /// Validate a full record.
    ///
    /// Returns the coerced record on success. On failure every offending key
    /// is reported: declared keys in rule order, then unknown keys.
    pub fn validate(&self, record: &Record) -> Result<Record, ValidationErrors> {
        let mut out = Record::new();
        let mut errors = Vec::new();
        let mut declared = HashSet::with_capacity(self.slots.len());

        for slot in &self.slots {
            declared.insert(slot.field.as_str());

            let value = record.field(slot.field);
            if slot.optional && value.is_none() {
                continue;
            }

            let props = field_props::get(slot.field);
            match props.validator.apply(value) {
                Ok(Some(coerced)) => {
                    out.set(slot.field, coerced);
                }
                Ok(None) => {}
                Err(detail) => errors.push(FieldError::Invalid {
                    field: slot.field,
                    message: props.validation_message,
                    detail,
                }),
            }
        }

        errors.extend(
            record
                .keys()
                .filter(|key| !declared.contains(key.as_str()))
                .map(|key| FieldError::Unknown { key: key.clone() }),
        );

        if errors.is_empty() {
            Ok(out)
        } else {
            Err(ValidationErrors(errors))
        }
    }

    #[must_use]
    pub fn is_valid(&self, record: &Record) -> bool {
        self.validate(record).is_ok()
    }
}

///
/// TESTS
///
