use crate::{record::Record, types::Field};
use serde_json::json;

pub(crate) const EXERCISE_ID: &str = "50c1fc75-0975-45f8-8177-ff4988b00de2";
pub(crate) const WORKOUT_ID: &str = "2158e1b2-27e0-4012-bb14-3846b3ee1d6a";
pub(crate) const MEASUREMENT_ID: &str = "43e3fc4e-b419-468c-9888-b5e072d81dfb";
pub(crate) const TIMESTAMP: i64 = 1_700_000_000_000;

/// Valid exercise that records reps and weight.
pub(crate) fn exercise() -> Record {
    Record::new()
        .with(Field::Id, EXERCISE_ID)
        .with(Field::Timestamp, TIMESTAMP)
        .with(Field::Name, "Barbell Squat")
        .with(Field::Desc, "")
        .with(Field::Enabled, true)
        .with(Field::Favorited, false)
        .with(Field::ExerciseInputs, json!(["reps", "weightLbs"]))
}

/// Valid workout over two exercises.
pub(crate) fn workout() -> Record {
    Record::new()
        .with(Field::Id, WORKOUT_ID)
        .with(Field::Timestamp, TIMESTAMP)
        .with(Field::Name, "StrongLifts 5x5 - Alpha")
        .with(Field::Desc, "")
        .with(Field::Enabled, true)
        .with(Field::Favorited, false)
        .with(
            Field::ExerciseIds,
            json!([EXERCISE_ID, "d681459e-10c8-40ae-94e9-9b06b7c40367"]),
        )
}

/// Valid body fat result with no value recorded yet.
pub(crate) fn measurement_result() -> Record {
    Record::new()
        .with(Field::Id, "9a4c8f0e-2f6b-4b0a-8a53-3e2f1c7d6b11")
        .with(Field::Timestamp, TIMESTAMP)
        .with(Field::ParentId, MEASUREMENT_ID)
        .with(Field::Note, "")
}
