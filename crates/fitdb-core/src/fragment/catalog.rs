//! The shared fragment catalog.
//!
//! Every field descriptor points at exactly one of these statics, so a field
//! that appears on several record types is checked by the same rule everywhere.

use crate::{
    MAX_HEIGHT_WEIGHT, MAX_NAME_LEN, MAX_SAFE_INTEGER, MAX_TEXT_AREA_LEN, MIN_NAME_LEN,
    fragment::{Fragment, Presence, Shape},
    types::{ExerciseInput, MeasurementInput, Severity},
};

// identifiers
pub static ID: Fragment = Fragment::new("id", Presence::Required, Shape::Uuid);
pub static AUTO_ID: Fragment = Fragment::new("auto-id", Presence::Optional, Shape::Integer);
pub static ID_ARRAY: Fragment = Fragment::new(
    "id-array",
    Presence::Defaulted,
    Shape::IdList { min_items: 0 },
);
pub static REQUIRED_ID_ARRAY: Fragment = Fragment::new(
    "required-id-array",
    Presence::Required,
    Shape::IdList { min_items: 1 },
);

// time
pub static TIMESTAMP: Fragment = Fragment::new("timestamp", Presence::Required, Shape::Integer);
pub static OPTIONAL_TIMESTAMP: Fragment =
    Fragment::new("optional-timestamp", Presence::Optional, Shape::Integer);

// text
pub static NAME: Fragment = Fragment::new(
    "name",
    Presence::Required,
    Shape::Text {
        min: MIN_NAME_LEN,
        max: MAX_NAME_LEN,
    },
);
pub static TEXT_AREA: Fragment = Fragment::new(
    "text-area",
    Presence::Defaulted,
    Shape::Text {
        min: 0,
        max: MAX_TEXT_AREA_LEN,
    },
);
pub static LABEL: Fragment = Fragment::new(
    "label",
    Presence::Required,
    Shape::Text {
        min: 1,
        max: usize::MAX,
    },
);
pub static KEY: Fragment = Fragment::new(
    "key",
    Presence::Required,
    Shape::Text {
        min: 1,
        max: usize::MAX,
    },
);
pub static TEXT: Fragment = Fragment::new(
    "text",
    Presence::Optional,
    Shape::Text {
        min: 0,
        max: usize::MAX,
    },
);

// untyped
pub static ANY: Fragment = Fragment::new("any", Presence::Optional, Shape::Any);
pub static ANY_REQUIRED: Fragment = Fragment::new("any-required", Presence::Required, Shape::Any);

pub static BOOLEAN: Fragment = Fragment::new("boolean", Presence::Required, Shape::Bool);

// enumerations
pub static SEVERITY: Fragment =
    Fragment::new("severity", Presence::Required, Shape::Enum(Severity::SLUGS));
pub static EXERCISE_INPUTS: Fragment = Fragment::new(
    "exercise-inputs",
    Presence::Required,
    Shape::EnumList(ExerciseInput::SLUGS),
);
pub static MEASUREMENT_INPUT: Fragment = Fragment::new(
    "measurement-input",
    Presence::Required,
    Shape::Enum(MeasurementInput::SLUGS),
);

// numbers
pub static PERCENT: Fragment = Fragment::new(
    "percent",
    Presence::Required,
    Shape::Number {
        min: 0.0,
        max: 100.0,
    },
);
pub static ZERO_PLUS_NUMBER: Fragment = Fragment::new(
    "zero-plus-number",
    Presence::Required,
    Shape::Number {
        min: 0.0,
        max: MAX_SAFE_INTEGER,
    },
);
pub static ZERO_PLUS_NUMBER_LIST: Fragment = Fragment::new(
    "zero-plus-number-list",
    Presence::Required,
    Shape::NumberList {
        len: None,
        min: 0.0,
        max: MAX_SAFE_INTEGER,
    },
);
pub static HEIGHT_WEIGHT: Fragment = Fragment::new(
    "height-weight",
    Presence::Required,
    Shape::NumberList {
        len: Some(2),
        min: 0.0,
        max: MAX_HEIGHT_WEIGHT,
    },
);

/// Every catalog fragment, for exhaustive checks.
pub static ALL: &[&Fragment] = &[
    &ID,
    &AUTO_ID,
    &ID_ARRAY,
    &REQUIRED_ID_ARRAY,
    &TIMESTAMP,
    &OPTIONAL_TIMESTAMP,
    &NAME,
    &TEXT_AREA,
    &LABEL,
    &KEY,
    &TEXT,
    &ANY,
    &ANY_REQUIRED,
    &BOOLEAN,
    &SEVERITY,
    &EXERCISE_INPUTS,
    &MEASUREMENT_INPUT,
    &PERCENT,
    &ZERO_PLUS_NUMBER,
    &ZERO_PLUS_NUMBER_LIST,
    &HEIGHT_WEIGHT,
];
