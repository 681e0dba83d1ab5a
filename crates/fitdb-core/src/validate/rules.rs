use crate::types::{Field, RecordType};

///
/// Slot
///
/// One declared key of a composite validator.
/// Optional slots may be absent; a present value is always checked.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Slot {
    pub field: Field,
    pub optional: bool,
}

impl Slot {
    #[must_use]
    pub const fn required(field: Field) -> Self {
        Self {
            field,
            optional: false,
        }
    }

    #[must_use]
    pub const fn optional(field: Field) -> Self {
        Self {
            field,
            optional: true,
        }
    }
}

const fn req(field: Field) -> Slot {
    Slot::required(field)
}

const fn opt(field: Field) -> Slot {
    Slot::optional(field)
}

//
// ============================================================================
// Groups
// ============================================================================
//

pub const CORE: &[Slot] = &[req(Field::Id), req(Field::Timestamp)];

pub const PARENT: &[Slot] = &[
    req(Field::Name),
    req(Field::Desc),
    req(Field::Enabled),
    req(Field::Favorited),
];

pub const CHILD: &[Slot] = &[req(Field::ParentId), req(Field::Note), opt(Field::Active)];

//
// ============================================================================
// Types
// ============================================================================
//

pub const LOG: &[Slot] = &[
    opt(Field::AutoId),
    req(Field::Timestamp),
    req(Field::Severity),
    req(Field::Label),
    opt(Field::Details),
    opt(Field::Message),
    opt(Field::Stack),
];

pub const SETTING: &[Slot] = &[req(Field::Key), req(Field::Value)];

pub const WORKOUT: &[Slot] = &[req(Field::ExerciseIds)];

pub const EXERCISE: &[Slot] = &[req(Field::ExerciseInputs)];

pub const MEASUREMENT: &[Slot] = &[req(Field::MeasurementInput)];

pub const WORKOUT_RESULT: &[Slot] = &[opt(Field::FinishedTimestamp), opt(Field::ExerciseResultIds)];

// only the families the parent declares are populated
pub const EXERCISE_RESULT: &[Slot] = &[
    opt(Field::Reps),
    opt(Field::WeightLbs),
    opt(Field::DistanceMiles),
    opt(Field::DurationMinutes),
    opt(Field::Watts),
    opt(Field::SpeedMph),
    opt(Field::Calories),
    opt(Field::Resistance),
];

pub const MEASUREMENT_RESULT: &[Slot] = &[
    opt(Field::HeightWeightLbs),
    opt(Field::Percent),
    opt(Field::Inches),
    opt(Field::Lbs),
];

/// Rule groups merged into the validator of a record type, in merge order.
#[must_use]
pub const fn groups_for(ty: RecordType) -> &'static [&'static [Slot]] {
    match ty {
        RecordType::Log => &[LOG],
        RecordType::Setting => &[SETTING],
        RecordType::Workout => &[CORE, PARENT, WORKOUT],
        RecordType::Exercise => &[CORE, PARENT, EXERCISE],
        RecordType::Measurement => &[CORE, PARENT, MEASUREMENT],
        RecordType::WorkoutResult => &[CORE, CHILD, WORKOUT_RESULT],
        RecordType::ExerciseResult => &[CORE, CHILD, EXERCISE_RESULT],
        RecordType::MeasurementResult => &[CORE, CHILD, MEASUREMENT_RESULT],
    }
}
