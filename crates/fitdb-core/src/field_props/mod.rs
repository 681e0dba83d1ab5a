//! Field descriptors: one authoritative description per [`Field`].
//!
//! Each descriptor pairs the field's validator fragment with its default
//! producer, its labels, its validation message, its display formatter, and
//! the optional input binding the presentation layer resolves to a widget.

pub mod format;

use crate::{
    fragment::{Fragment, catalog},
    types::{Field, RecordType},
};
use format::*;
use serde_json::Value;

slug_enum! {
    ///
    /// InputBinding
    ///
    /// Opaque identifier of the editable input a form renders for a field.
    /// Fields without a binding are system-managed and never user-edited.
    ///
    pub enum InputBinding ("input binding") {
        ExerciseIds => "input-exercise-ids",
        ExerciseInputs => "input-exercise-inputs",
        ExerciseResultIds => "input-exercise-result-ids",
        MeasurementInput => "input-measurement-input",
        Name => "input-name",
        Number => "input-number",
        TextArea => "input-text-area",
        Timestamp => "input-timestamp",
        Toggle => "input-toggle",
    }
}

///
/// FieldProps
///

#[derive(Clone, Copy, Debug)]
pub struct FieldProps {
    pub field: Field,
    pub label: &'static str,
    pub desc: Option<&'static str>,
    pub get_default: fn() -> Option<Value>,
    pub validator: &'static Fragment,
    pub validation_message: &'static str,
    pub inspect_format: fn(Option<&Value>) -> String,
    pub component: Option<InputBinding>,
}

impl FieldProps {
    /// Value a freshly created record starts with, if the field has one.
    #[must_use]
    pub fn default_value(&self) -> Option<Value> {
        (self.get_default)()
    }

    /// Display text for a stored value; never fails.
    #[must_use]
    pub fn inspect(&self, value: Option<&Value>) -> String {
        (self.inspect_format)(value)
    }

    #[must_use]
    pub const fn is_editable(&self) -> bool {
        self.component.is_some()
    }
}

/// Descriptor for a field.
#[must_use]
pub fn get(field: Field) -> &'static FieldProps {
    match field {
        Field::Id => &ID,
        Field::Timestamp => &TIMESTAMP,
        Field::AutoId => &AUTO_ID,
        Field::Severity => &SEVERITY,
        Field::Label => &LABEL,
        Field::Details => &DETAILS,
        Field::Message => &MESSAGE,
        Field::Stack => &STACK,
        Field::Key => &KEY,
        Field::Value => &VALUE,
        Field::Name => &NAME,
        Field::Desc => &DESC,
        Field::Enabled => &ENABLED,
        Field::Favorited => &FAVORITED,
        Field::Active => &ACTIVE,
        Field::ParentId => &PARENT_ID,
        Field::Note => &NOTE,
        Field::ExerciseIds => &EXERCISE_IDS,
        Field::ExerciseInputs => &EXERCISE_INPUTS,
        Field::MeasurementInput => &MEASUREMENT_INPUT,
        Field::FinishedTimestamp => &FINISHED_TIMESTAMP,
        Field::ExerciseResultIds => &EXERCISE_RESULT_IDS,
        Field::Reps => &REPS,
        Field::WeightLbs => &WEIGHT_LBS,
        Field::DistanceMiles => &DISTANCE_MILES,
        Field::DurationMinutes => &DURATION_MINUTES,
        Field::Watts => &WATTS,
        Field::SpeedMph => &SPEED_MPH,
        Field::Calories => &CALORIES,
        Field::Resistance => &RESISTANCE,
        Field::HeightWeightLbs => &HEIGHT_WEIGHT_LBS,
        Field::Percent => &PERCENT,
        Field::Inches => &INCHES,
        Field::Lbs => &LBS,
    }
}

//
// ============================================================================
// Field sets
// ============================================================================
//

pub const CORE_FIELDS: &[Field] = &[Field::Id, Field::Timestamp];
pub const PARENT_FIELDS: &[Field] = &[Field::Name, Field::Desc, Field::Enabled, Field::Favorited];
pub const CHILD_FIELDS: &[Field] = &[Field::ParentId, Field::Note, Field::Active];

pub const LOG_FIELDS: &[Field] = &[
    Field::AutoId,
    Field::Timestamp,
    Field::Severity,
    Field::Label,
    Field::Details,
    Field::Message,
    Field::Stack,
];
pub const SETTING_FIELDS: &[Field] = &[Field::Key, Field::Value];

pub const WORKOUT_FIELDS: &[Field] = &[Field::ExerciseIds];
pub const EXERCISE_FIELDS: &[Field] = &[Field::ExerciseInputs];
pub const MEASUREMENT_FIELDS: &[Field] = &[Field::MeasurementInput];
pub const WORKOUT_RESULT_FIELDS: &[Field] = &[Field::FinishedTimestamp, Field::ExerciseResultIds];
pub const EXERCISE_RESULT_FIELDS: &[Field] = &[
    Field::Reps,
    Field::WeightLbs,
    Field::DistanceMiles,
    Field::DurationMinutes,
    Field::Watts,
    Field::SpeedMph,
    Field::Calories,
    Field::Resistance,
];
pub const MEASUREMENT_RESULT_FIELDS: &[Field] = &[
    Field::HeightWeightLbs,
    Field::Percent,
    Field::Inches,
    Field::Lbs,
];

/// Ordered descriptor list for a record type, built by group concatenation.
#[must_use]
pub fn type_fields(ty: RecordType) -> Vec<&'static FieldProps> {
    let groups: &[&[Field]] = match ty {
        RecordType::Log => &[LOG_FIELDS],
        RecordType::Setting => &[SETTING_FIELDS],
        RecordType::Workout => &[CORE_FIELDS, PARENT_FIELDS, WORKOUT_FIELDS],
        RecordType::Exercise => &[CORE_FIELDS, PARENT_FIELDS, EXERCISE_FIELDS],
        RecordType::Measurement => &[CORE_FIELDS, PARENT_FIELDS, MEASUREMENT_FIELDS],
        RecordType::WorkoutResult => &[CORE_FIELDS, CHILD_FIELDS, WORKOUT_RESULT_FIELDS],
        RecordType::ExerciseResult => &[CORE_FIELDS, CHILD_FIELDS, EXERCISE_RESULT_FIELDS],
        RecordType::MeasurementResult => &[CORE_FIELDS, CHILD_FIELDS, MEASUREMENT_RESULT_FIELDS],
    };

    groups.iter().flat_map(|g| g.iter()).map(|f| get(*f)).collect()
}

//
// ============================================================================
// Log
// ============================================================================
//

static AUTO_ID: FieldProps = FieldProps {
    field: Field::AutoId,
    label: "Auto Id",
    desc: None,
    get_default: default_none,
    validator: &catalog::AUTO_ID,
    validation_message: "Invalid",
    inspect_format: format_plain,
    component: None,
};

static SEVERITY: FieldProps = FieldProps {
    field: Field::Severity,
    label: "Severity",
    desc: None,
    get_default: default_none,
    validator: &catalog::SEVERITY,
    validation_message: "Invalid",
    inspect_format: format_plain,
    component: None,
};

static LABEL: FieldProps = FieldProps {
    field: Field::Label,
    label: "Label",
    desc: None,
    get_default: default_none,
    validator: &catalog::LABEL,
    validation_message: "Invalid",
    inspect_format: format_plain,
    component: None,
};

static DETAILS: FieldProps = FieldProps {
    field: Field::Details,
    label: "Details",
    desc: None,
    get_default: default_none,
    validator: &catalog::ANY,
    validation_message: "Invalid",
    inspect_format: format_details,
    component: None,
};

static MESSAGE: FieldProps = FieldProps {
    field: Field::Message,
    label: "Message",
    desc: None,
    get_default: default_none,
    validator: &catalog::TEXT,
    validation_message: "Invalid",
    inspect_format: format_plain,
    component: None,
};

static STACK: FieldProps = FieldProps {
    field: Field::Stack,
    label: "Stack",
    desc: None,
    get_default: default_none,
    validator: &catalog::TEXT,
    validation_message: "Invalid",
    inspect_format: format_plain,
    component: None,
};

//
// ============================================================================
// Setting
// ============================================================================
//

static KEY: FieldProps = FieldProps {
    field: Field::Key,
    label: "Key",
    desc: None,
    get_default: default_none,
    validator: &catalog::KEY,
    validation_message: "Invalid",
    inspect_format: format_plain,
    component: None,
};

static VALUE: FieldProps = FieldProps {
    field: Field::Value,
    label: "Value",
    desc: None,
    get_default: default_none,
    validator: &catalog::ANY_REQUIRED,
    validation_message: "Invalid",
    inspect_format: format_any,
    component: None,
};

//
// ============================================================================
// Core
// ============================================================================
//

static ID: FieldProps = FieldProps {
    field: Field::Id,
    label: "Id",
    desc: None,
    get_default: default_uuid,
    validator: &catalog::ID,
    validation_message: "Invalid",
    inspect_format: format_plain,
    component: None,
};

static TIMESTAMP: FieldProps = FieldProps {
    field: Field::Timestamp,
    label: "Created Date",
    desc: None,
    get_default: default_now,
    validator: &catalog::TIMESTAMP,
    validation_message: "Invalid",
    inspect_format: format_date,
    component: Some(InputBinding::Timestamp),
};

//
// ============================================================================
// Parent
// ============================================================================
//

static NAME: FieldProps = FieldProps {
    field: Field::Name,
    label: "Name",
    desc: None,
    get_default: default_none,
    validator: &catalog::NAME,
    validation_message: "Name must be between 1 and 50 characters",
    inspect_format: format_plain,
    component: Some(InputBinding::Name),
};

static DESC: FieldProps = FieldProps {
    field: Field::Desc,
    label: "Description",
    desc: None,
    get_default: default_empty_text,
    validator: &catalog::TEXT_AREA,
    validation_message: "Description cannot exceed 500 characters",
    inspect_format: format_plain,
    component: Some(InputBinding::TextArea),
};

static ENABLED: FieldProps = FieldProps {
    field: Field::Enabled,
    label: "Enabled",
    desc: Some("Whether the record is enabled and shows up on the Dashboard and in other lists."),
    get_default: default_true,
    validator: &catalog::BOOLEAN,
    validation_message: "* Required",
    inspect_format: format_yes_no,
    component: Some(InputBinding::Toggle),
};

static FAVORITED: FieldProps = FieldProps {
    field: Field::Favorited,
    label: "Favorited",
    desc: Some("Whether the record is favorited and is prioritized on the Dashboard."),
    get_default: default_false,
    validator: &catalog::BOOLEAN,
    validation_message: "* Required",
    inspect_format: format_yes_no,
    component: Some(InputBinding::Toggle),
};

//
// ============================================================================
// Child
// ============================================================================
//

static PARENT_ID: FieldProps = FieldProps {
    field: Field::ParentId,
    label: "Parent Id",
    desc: None,
    get_default: default_none,
    validator: &catalog::ID,
    validation_message: "Invalid",
    inspect_format: format_plain,
    component: None,
};

static NOTE: FieldProps = FieldProps {
    field: Field::Note,
    label: "Note",
    desc: Some("Text note about the record that can be viewed on the Dashboard."),
    get_default: default_empty_text,
    validator: &catalog::TEXT_AREA,
    validation_message: "Note cannot exceed 500 characters",
    inspect_format: format_plain,
    component: Some(InputBinding::TextArea),
};

// toggled by the workflow that records results, not by a form
static ACTIVE: FieldProps = FieldProps {
    field: Field::Active,
    label: "Active",
    desc: None,
    get_default: default_false,
    validator: &catalog::BOOLEAN,
    validation_message: "* Required",
    inspect_format: format_yes_no,
    component: None,
};

//
// ============================================================================
// Parent types
// ============================================================================
//

static EXERCISE_IDS: FieldProps = FieldProps {
    field: Field::ExerciseIds,
    label: "Exercises",
    desc: Some("Exercises to be performed in the workout in the order selected."),
    get_default: default_none,
    validator: &catalog::REQUIRED_ID_ARRAY,
    validation_message: "Must have at least one exercise selected",
    inspect_format: format_list,
    component: Some(InputBinding::ExerciseIds),
};

static EXERCISE_INPUTS: FieldProps = FieldProps {
    field: Field::ExerciseInputs,
    label: "Exercise Inputs",
    desc: Some(
        "Select the exercise inputs that you can record data to for this record. \
         Leave blank if you want the record to be purely instructional during a workout.",
    ),
    get_default: default_empty_list,
    validator: &catalog::EXERCISE_INPUTS,
    validation_message: "Invalid",
    inspect_format: format_list,
    component: Some(InputBinding::ExerciseInputs),
};

static MEASUREMENT_INPUT: FieldProps = FieldProps {
    field: Field::MeasurementInput,
    label: "Measurement Input",
    desc: Some(
        "Select the measurement input that you can record data to for this record. \
         You must select one.",
    ),
    get_default: default_none,
    validator: &catalog::MEASUREMENT_INPUT,
    validation_message: "Must select a measurement input",
    inspect_format: format_plain,
    component: Some(InputBinding::MeasurementInput),
};

//
// ============================================================================
// Workout result
// ============================================================================
//

static FINISHED_TIMESTAMP: FieldProps = FieldProps {
    field: Field::FinishedTimestamp,
    label: "Finished Date",
    desc: None,
    get_default: default_none,
    validator: &catalog::OPTIONAL_TIMESTAMP,
    validation_message: "Invalid",
    inspect_format: format_date,
    component: Some(InputBinding::Timestamp),
};

static EXERCISE_RESULT_IDS: FieldProps = FieldProps {
    field: Field::ExerciseResultIds,
    label: "Exercise Results",
    desc: Some(
        "The exercise results to be recorded for the workout in the order selected. \
         Can be left blank for instructional workouts.",
    ),
    get_default: default_empty_list,
    validator: &catalog::ID_ARRAY,
    validation_message: "Invalid",
    inspect_format: format_list,
    component: Some(InputBinding::ExerciseResultIds),
};

//
// ============================================================================
// Exercise result
// ============================================================================
//

// one entry per performed set, filled in by the workout flow
macro_rules! set_values_field {
    ($name:ident, $field:ident, $label:literal) => {
        static $name: FieldProps = FieldProps {
            field: Field::$field,
            label: $label,
            desc: None,
            get_default: default_none,
            validator: &catalog::ZERO_PLUS_NUMBER_LIST,
            validation_message: "Must be 0 or greater",
            inspect_format: format_list,
            component: None,
        };
    };
}

set_values_field!(REPS, Reps, "Reps");
set_values_field!(WEIGHT_LBS, WeightLbs, "Weight (lbs)");
set_values_field!(DISTANCE_MILES, DistanceMiles, "Distance (miles)");
set_values_field!(DURATION_MINUTES, DurationMinutes, "Duration (minutes)");
set_values_field!(WATTS, Watts, "Watts");
set_values_field!(SPEED_MPH, SpeedMph, "Speed (mph)");
set_values_field!(CALORIES, Calories, "Calories Burned");
set_values_field!(RESISTANCE, Resistance, "Resistance");

//
// ============================================================================
// Measurement result
// ============================================================================
//

static HEIGHT_WEIGHT_LBS: FieldProps = FieldProps {
    field: Field::HeightWeightLbs,
    label: "Body Weight (lbs)",
    desc: Some("Height in inches and body weight in pounds, stored as a pair."),
    get_default: default_none,
    validator: &catalog::HEIGHT_WEIGHT,
    validation_message: "Height and weight must each be between 0 and 1000",
    inspect_format: format_list,
    component: None,
};

static PERCENT: FieldProps = FieldProps {
    field: Field::Percent,
    label: "Percentage",
    desc: None,
    get_default: default_none,
    validator: &catalog::PERCENT,
    validation_message: "Must be between 0 and 100",
    inspect_format: format_percent,
    component: Some(InputBinding::Number),
};

static INCHES: FieldProps = FieldProps {
    field: Field::Inches,
    label: "Inches",
    desc: None,
    get_default: default_none,
    validator: &catalog::ZERO_PLUS_NUMBER,
    validation_message: "Must be 0 or greater",
    inspect_format: format_plain,
    component: Some(InputBinding::Number),
};

static LBS: FieldProps = FieldProps {
    field: Field::Lbs,
    label: "Pounds",
    desc: None,
    get_default: default_none,
    validator: &catalog::ZERO_PLUS_NUMBER,
    validation_message: "Must be 0 or greater",
    inspect_format: format_plain,
    component: Some(InputBinding::Number),
};

///
/// TESTS
///
