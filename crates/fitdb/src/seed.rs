//! Built-in seed data.
//!
//! Each set is a fixed list of literal records stamped with a caller-supplied
//! time. A set is validated in full before anything is imported, and types
//! are imported in dependency order (exercises before the workouts that list
//! them).

use crate::store::{self, RecordImporter, StoreError};
use fitdb_core::{
    record::Record,
    schema::Registry,
    types::{ExerciseInput, Field, LogRetention, MeasurementInput, RecordType, SettingKey, UnknownSlug},
    validate::ValidationErrors,
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::{fmt, str::FromStr};
use thiserror::Error as ThisError;

///
/// SeedError
///

#[remain::sorted]
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SeedError {
    #[error("seed set '{set}': {record_type} record {index} rejected: {errors}")]
    Rejected {
        set: SeedSet,
        record_type: RecordType,
        index: usize,
        errors: ValidationErrors,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

///
/// SeedSet
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeedSet {
    BarbellStrength,
    StretchRoutine,
    CarpalTunnel,
    DeepBreathing,
    StandardMeasurements,
    DefaultSettings,
}

impl SeedSet {
    pub const ALL: &'static [Self] = &[
        Self::BarbellStrength,
        Self::StretchRoutine,
        Self::CarpalTunnel,
        Self::DeepBreathing,
        Self::StandardMeasurements,
        Self::DefaultSettings,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BarbellStrength => "barbell-strength",
            Self::StretchRoutine => "stretch-routine",
            Self::CarpalTunnel => "carpal-tunnel",
            Self::DeepBreathing => "deep-breathing",
            Self::StandardMeasurements => "standard-measurements",
            Self::DefaultSettings => "default-settings",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BarbellStrength => "Barbell Strength Workouts",
            Self::StretchRoutine => "Stretch Routine",
            Self::CarpalTunnel => "Carpal Tunnel Routine",
            Self::DeepBreathing => "Deep Breathing Routine",
            Self::StandardMeasurements => "Standard Measurements",
            Self::DefaultSettings => "Default Settings",
        }
    }

    /// Records of this set grouped per type, in import order.
    #[must_use]
    pub fn batches(self, now_ms: i64) -> Vec<(RecordType, Vec<Record>)> {
        match self {
            Self::BarbellStrength => routine(BARBELL_EXERCISES, BARBELL_WORKOUTS, now_ms),
            Self::StretchRoutine => routine(STRETCH_EXERCISES, STRETCH_WORKOUTS, now_ms),
            Self::CarpalTunnel => routine(CARPAL_TUNNEL_EXERCISES, CARPAL_TUNNEL_WORKOUTS, now_ms),
            Self::DeepBreathing => routine(BREATHING_EXERCISES, BREATHING_WORKOUTS, now_ms),
            Self::StandardMeasurements => vec![(
                RecordType::Measurement,
                STANDARD_MEASUREMENTS
                    .iter()
                    .map(|m| m.record(now_ms))
                    .collect(),
            )],
            Self::DefaultSettings => vec![(RecordType::Setting, default_settings())],
        }
    }
}

impl fmt::Display for SeedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeedSet {
    type Err = UnknownSlug;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|set| set.as_str() == s)
            .ok_or_else(|| UnknownSlug::new("seed set", s))
    }
}

///
/// SeedReport
/// Records imported per type.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SeedReport {
    pub set: SeedSet,
    pub imported: Vec<(RecordType, usize)>,
}

impl SeedReport {
    #[must_use]
    pub fn count(&self, record_type: RecordType) -> usize {
        self.imported
            .iter()
            .filter(|(ty, _)| *ty == record_type)
            .map(|(_, n)| n)
            .sum()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.imported.iter().map(|(_, n)| n).sum()
    }
}

/// Validate and import one seed set.
pub fn seed(
    registry: &Registry,
    importer: &mut dyn RecordImporter,
    set: SeedSet,
    now_ms: i64,
) -> Result<SeedReport, SeedError> {
    let mut validated = Vec::new();
    for (record_type, records) in set.batches(now_ms) {
        let batch = records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                registry
                    .validate(record_type, record)
                    .map_err(|errors| SeedError::Rejected {
                        set,
                        record_type,
                        index,
                        errors,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        validated.push((record_type, batch));
    }

    let mut imported = Vec::with_capacity(validated.len());
    for (record_type, batch) in validated {
        let count = store::import_batch(registry, importer, record_type, batch)?;
        imported.push((record_type, count));
    }

    Ok(SeedReport { set, imported })
}

//
// ============================================================================
// Record builders
// ============================================================================
//

struct ExerciseSeed {
    id: &'static str,
    name: &'static str,
    desc: &'static str,
    inputs: &'static [ExerciseInput],
}

struct WorkoutSeed {
    id: &'static str,
    name: &'static str,
    desc: &'static str,
    exercise_ids: &'static [&'static str],
}

struct MeasurementSeed {
    id: &'static str,
    name: &'static str,
    desc: &'static str,
    input: MeasurementInput,
}

fn parent(id: &str, name: &str, desc: &str, now_ms: i64) -> Record {
    Record::new()
        .with(Field::Id, id)
        .with(Field::Timestamp, now_ms)
        .with(Field::Name, name)
        .with(Field::Desc, desc)
        .with(Field::Enabled, true)
        .with(Field::Favorited, false)
}

impl ExerciseSeed {
    fn record(&self, now_ms: i64) -> Record {
        let inputs: Vec<_> = self.inputs.iter().map(|i| i.as_str()).collect();

        parent(self.id, self.name, self.desc, now_ms).with(Field::ExerciseInputs, inputs)
    }
}

impl WorkoutSeed {
    fn record(&self, now_ms: i64) -> Record {
        parent(self.id, self.name, self.desc, now_ms)
            .with(Field::ExerciseIds, self.exercise_ids.to_vec())
    }
}

impl MeasurementSeed {
    fn record(&self, now_ms: i64) -> Record {
        parent(self.id, self.name, self.desc, now_ms)
            .with(Field::MeasurementInput, self.input.as_str())
    }
}

fn routine(
    exercises: &[ExerciseSeed],
    workouts: &[WorkoutSeed],
    now_ms: i64,
) -> Vec<(RecordType, Vec<Record>)> {
    vec![
        (
            RecordType::Exercise,
            exercises.iter().map(|e| e.record(now_ms)).collect(),
        ),
        (
            RecordType::Workout,
            workouts.iter().map(|w| w.record(now_ms)).collect(),
        ),
    ]
}

fn default_settings() -> Vec<Record> {
    SettingKey::ALL
        .iter()
        .map(|key| {
            let value: Value = match key {
                SettingKey::ShowWelcome
                | SettingKey::ShowDescriptions
                | SettingKey::ShowInfoMessages => json!(true),
                SettingKey::DarkMode | SettingKey::ShowConsoleLogs => json!(false),
                SettingKey::LogRetentionTime => json!(LogRetention::OneYear.as_str()),
            };

            Record::new()
                .with(Field::Key, key.as_str())
                .with(Field::Value, value)
        })
        .collect()
}

//
// ============================================================================
// Barbell strength
// ============================================================================
//

const REPS_WEIGHT: &[ExerciseInput] = &[ExerciseInput::Reps, ExerciseInput::WeightLbs];
const NO_INPUTS: &[ExerciseInput] = &[];

const BARBELL_SQUAT: &str = "50c1fc75-0975-45f8-8177-ff4988b00de2";
const BARBELL_BENCH_PRESS: &str = "d681459e-10c8-40ae-94e9-9b06b7c40367";
const BARBELL_ROWS: &str = "08b12cc1-d4b9-4d22-82db-9e33b3e5c3fa";
const BARBELL_OVERHEAD_PRESS: &str = "cc279615-91a6-42ac-a073-4339e7c2034f";
const BARBELL_DEADLIFT: &str = "b8f1a60e-7f21-4f62-8757-d9b371bffd45";

const BARBELL_EXERCISES: &[ExerciseSeed] = &[
    ExerciseSeed {
        id: BARBELL_SQUAT,
        name: "Barbell Squat",
        desc: "Standing barbell squat with the bar resting near your neck.",
        inputs: REPS_WEIGHT,
    },
    ExerciseSeed {
        id: BARBELL_BENCH_PRESS,
        name: "Barbell Bench Press",
        desc: "Lying barbell bench press chest exercise.",
        inputs: REPS_WEIGHT,
    },
    ExerciseSeed {
        id: BARBELL_ROWS,
        name: "Barbell Standing Rows",
        desc: "Standing barbell rows where you hinge at the waist and pull the bar up into \
               your stomach.",
        inputs: REPS_WEIGHT,
    },
    ExerciseSeed {
        id: BARBELL_OVERHEAD_PRESS,
        name: "Barbell Overhead Press",
        desc: "Standing barbell overhead press. Flex your glutes and abs to keep your back \
               straight while pushing the bar above your head.",
        inputs: REPS_WEIGHT,
    },
    ExerciseSeed {
        id: BARBELL_DEADLIFT,
        name: "Barbell Deadlift",
        desc: "Standing barbell deadlift. Keep your back straight and flexed while lifting \
               with your legs and lower back.",
        inputs: REPS_WEIGHT,
    },
];

const BARBELL_WORKOUTS: &[WorkoutSeed] = &[
    WorkoutSeed {
        id: "2158e1b2-27e0-4012-bb14-3846b3ee1d6a",
        name: "Barbell Strength - A",
        desc: "Workout A of the barbell strength building program where you alternate \
               between this and workout B. Do this workout 1-2 times per week.",
        exercise_ids: &[BARBELL_SQUAT, BARBELL_BENCH_PRESS, BARBELL_ROWS],
    },
    WorkoutSeed {
        id: "f3a1537c-4d63-43e1-99bd-df5ef59ac220",
        name: "Barbell Strength - B",
        desc: "Workout B of the barbell strength building program where you alternate \
               between this and workout A. Do this workout 1-2 times per week. You should \
               only do 1 set of the Barbell Deadlift exercise in this program.",
        exercise_ids: &[BARBELL_SQUAT, BARBELL_OVERHEAD_PRESS, BARBELL_DEADLIFT],
    },
];

//
// ============================================================================
// Stretch routine
// ============================================================================
//

const LYING_GLUTE: &str = "e0cd33be-e28a-46c3-80e6-263240ad5b87";
const PIGEON: &str = "9007a082-249b-48b7-ba59-463d58a20ba5";
const FROG: &str = "8653a6cf-8d26-4115-bda3-d28598065d02";
const STANDING_QUAD: &str = "a6e35a70-9249-4515-a45f-6b7787e23156";
const TOE_TOUCH: &str = "7f40466f-8621-4567-9181-5fd45fa2418b";
const STANDING_CALF: &str = "a291154a-bd22-4738-8559-0e4ee48e570d";
const STANDING_CHEST: &str = "5756d452-9272-4cbd-a144-e2b98acf8a3f";
const CROSS_FOAM_ROLL: &str = "66c24ef3-0d53-460f-bff4-4888fb687b93";
const PARALLEL_FOAM_ROLL: &str = "2a940995-08fc-4faf-9e52-d94f01e684b8";

const STRETCH_EXERCISES: &[ExerciseSeed] = &[
    ExerciseSeed {
        id: LYING_GLUTE,
        name: "Lying Glute Stretch",
        desc: "Lying on your back, bring your knee to your chest and then across your body. \
               Hold for 30 seconds and then repeat on the other side.",
        inputs: NO_INPUTS,
    },
    ExerciseSeed {
        id: PIGEON,
        name: "Pigeon Stretch",
        desc: "Bring one leg in front of you at an angle with the other behind you. Hold for \
               30 seconds and then repeat on the other side.",
        inputs: NO_INPUTS,
    },
    ExerciseSeed {
        id: FROG,
        name: "Frog Stretch",
        desc: "Get on all fours and spread your knees apart. Hold for 30 seconds.",
        inputs: NO_INPUTS,
    },
    ExerciseSeed {
        id: STANDING_QUAD,
        name: "Standing Quad Stretch",
        desc: "Standing on one leg, bring your other leg up behind you. Hold for 30 seconds \
               and then repeat on the other side.",
        inputs: NO_INPUTS,
    },
    ExerciseSeed {
        id: TOE_TOUCH,
        name: "Standing Toe Touch Stretch",
        desc: "Standing with your legs straight, bend over and try to touch your toes. Hold \
               for 30 seconds.",
        inputs: NO_INPUTS,
    },
    ExerciseSeed {
        id: STANDING_CALF,
        name: "Standing Calf Stretch",
        desc: "Lean against a wall with one leg in front of the other. Hold for 30 seconds \
               and then repeat on the other side.",
        inputs: NO_INPUTS,
    },
    ExerciseSeed {
        id: STANDING_CHEST,
        name: "Standing Chest Stretch",
        desc: "Lean against a wall with your elbows behind you. Hold for 30 seconds.",
        inputs: NO_INPUTS,
    },
    ExerciseSeed {
        id: CROSS_FOAM_ROLL,
        name: "Cross Spinal Foam Roll",
        desc: "Foam roll your back going up and down your spine for 90 seconds.",
        inputs: NO_INPUTS,
    },
    ExerciseSeed {
        id: PARALLEL_FOAM_ROLL,
        name: "Parallel Spinal Foam Roll",
        desc: "Lay on a foam roller with it aligned with your spine. Rest with your arms out \
               to the side for 90 seconds.",
        inputs: NO_INPUTS,
    },
];

const STRETCH_WORKOUTS: &[WorkoutSeed] = &[WorkoutSeed {
    id: "80add653-aa96-4253-9d94-a30cb10cfa5f",
    name: "Stretch Routine",
    desc: "Simple routine with a variety of stretches focusing on larger muscle groups to \
           help you relax and recover. Do this routine after a workout or every day if \
           possible.",
    exercise_ids: &[
        LYING_GLUTE,
        PIGEON,
        FROG,
        STANDING_QUAD,
        TOE_TOUCH,
        STANDING_CALF,
        STANDING_CHEST,
        CROSS_FOAM_ROLL,
        PARALLEL_FOAM_ROLL,
    ],
}];

//
// ============================================================================
// Carpal tunnel routine
// ============================================================================
//

const NERVE_SLIDERS: &str = "db513a6b-b0c0-497a-a034-7456d072d98b";
const FIST_EXTENSIONS: &str = "3776575a-3c89-4286-904f-f724bd143aca";
const FINGER_TIP_FLEXION: &str = "ceac93d5-6db9-4cca-bcaf-570a25e4a282";
const KNUCKLE_FLEXION: &str = "e7ddd519-807e-456e-9cb5-7496be50cb9c";
const THUMB_STRETCH: &str = "ee84a9f7-961c-4dbc-bf97-aa9f5b8a353e";
const WRIST_STRETCH: &str = "f66d5c5f-03fc-43a4-b0f3-af0af58b41a7";

const CARPAL_TUNNEL_EXERCISES: &[ExerciseSeed] = &[
    ExerciseSeed {
        id: NERVE_SLIDERS,
        name: "Median Nerve Sliders",
        desc: "Bring your hand in front of your face, then fully extend your arm to the side \
               while stretching your hand back and forth. Repeat 15 times on each hand.",
        inputs: NO_INPUTS,
    },
    ExerciseSeed {
        id: FIST_EXTENSIONS,
        name: "Fist, Knuckle, Finger Extensions",
        desc: "Start with your hands in a fist, then roll out to your knuckles, and then \
               extend your fingers. Repeat 15 times.",
        inputs: NO_INPUTS,
    },
    ExerciseSeed {
        id: FINGER_TIP_FLEXION,
        name: "Finger Tip Flexion",
        desc: "Flex each of your fingers (including your thumbs) one at a time without \
               bending your knuckles if possible. Repeat 15 times per finger.",
        inputs: NO_INPUTS,
    },
    ExerciseSeed {
        id: KNUCKLE_FLEXION,
        name: "Finger Knuckle Flexion",
        desc: "Flex each of your finger knuckles one at a time. Repeat 15 times per finger \
               (minus the thumbs).",
        inputs: NO_INPUTS,
    },
    ExerciseSeed {
        id: THUMB_STRETCH,
        name: "In/Out Thumb Stretch",
        desc: "Touch your thumbs as close to the base of your pinky as possible, then open \
               your hands and spread them far apart. Repeat 15 times.",
        inputs: NO_INPUTS,
    },
    ExerciseSeed {
        id: WRIST_STRETCH,
        name: "Gentle Wrist Stretch",
        desc: "Relax your arms in a T-Rex position, then bring them back while opening your \
               hands for a brief stretch. Repeat 15 times.",
        inputs: NO_INPUTS,
    },
];

const CARPAL_TUNNEL_WORKOUTS: &[WorkoutSeed] = &[WorkoutSeed {
    id: "cba94a35-d450-4d0f-955f-df6315522622",
    name: "Carpal Tunnel Routine",
    desc: "Physical therapy routine for carpal tunnel syndrome. Do this routine on days \
           where you did any heavy activity with your wrists.",
    exercise_ids: &[
        NERVE_SLIDERS,
        FIST_EXTENSIONS,
        FINGER_TIP_FLEXION,
        KNUCKLE_FLEXION,
        THUMB_STRETCH,
        WRIST_STRETCH,
    ],
}];

//
// ============================================================================
// Deep breathing routine
// ============================================================================
//

const PURSED_LIP: &str = "729bcb7e-6b40-4497-ba0e-8cce6b57341a";
const DIAPHRAGMATIC: &str = "15092ca3-e7c8-4214-a935-8c90126cf408";
const BOX_BREATHING: &str = "cd75a9c7-fed8-4c98-83db-9dc3a64725a0";

const BREATHING_EXERCISES: &[ExerciseSeed] = &[
    ExerciseSeed {
        id: PURSED_LIP,
        name: "Pursed Lip Breathing",
        desc: "Inhale through your nose for 2 seconds, then exhale slowly through pursed \
               lips for 4 seconds. Repeat 10 times.",
        inputs: NO_INPUTS,
    },
    ExerciseSeed {
        id: DIAPHRAGMATIC,
        name: "Diaphragmatic Breathing",
        desc: "Place one hand on your chest. Inhale through your nose for 2 seconds, then \
               contract your abdominal muscles and exhale slowly through pursed lips for 4 \
               seconds. The hand on your chest should have minimal movement during this \
               process. Repeat 10 times.",
        inputs: NO_INPUTS,
    },
    ExerciseSeed {
        id: BOX_BREATHING,
        name: "Box Breathing",
        desc: "Inhale through your nose for 4 seconds, hold your breath for 4 seconds, \
               exhale through your mouth for 4 seconds, then hold your breath for 4 seconds. \
               Repeat 10 times.",
        inputs: NO_INPUTS,
    },
];

const BREATHING_WORKOUTS: &[WorkoutSeed] = &[WorkoutSeed {
    id: "b0752f64-e6ba-4d98-a981-67860d7ab665",
    name: "Deep Breathing Routine",
    desc: "Deep breathing routine for improving lung capacity, oxygen intake, and relieving \
           stress. Do this routine in a comfortable position (sitting or lying down) and in a \
           quiet environment.",
    exercise_ids: &[PURSED_LIP, DIAPHRAGMATIC, BOX_BREATHING],
}];

//
// ============================================================================
// Standard measurements
// ============================================================================
//

const fn inches(id: &'static str, name: &'static str, desc: &'static str) -> MeasurementSeed {
    MeasurementSeed {
        id,
        name,
        desc,
        input: MeasurementInput::Inches,
    }
}

const STANDARD_MEASUREMENTS: &[MeasurementSeed] = &[
    MeasurementSeed {
        id: "43e3fc4e-b419-468c-9888-b5e072d81dfb",
        name: "Body Fat",
        desc: "Body fat percentage (%).",
        input: MeasurementInput::Percent,
    },
    MeasurementSeed {
        id: "b4450018-1506-450f-a429-9903aded5c9b",
        name: "Body Weight",
        desc: "Body weight in pounds (lbs).",
        input: MeasurementInput::Lbs,
    },
    inches(
        "880cb344-e537-4f0f-bad4-e212a6df51cd",
        "Chest",
        "Chest circumference in inches.",
    ),
    inches(
        "e126e959-1675-4b3b-866c-261e453d8dae",
        "Left Bicep",
        "Left bicep circumference in inches.",
    ),
    inches(
        "09108d87-8337-4424-83a1-1ee5be5e8585",
        "Left Calf",
        "Left calf circumference in inches.",
    ),
    inches(
        "96c7229d-91e8-4470-b0a9-ebb1234fe6e7",
        "Left Forearm",
        "Left forearm circumference in inches.",
    ),
    inches(
        "3e3d0d91-3280-491d-967e-d56dcfc51520",
        "Left Thigh",
        "Left thigh circumference in inches.",
    ),
    inches(
        "0090f468-5917-4124-98bd-1e7711ab360e",
        "Neck",
        "Neck circumference in inches.",
    ),
    inches(
        "9fddbad2-ba89-4476-95e4-10d9969e782c",
        "Right Bicep",
        "Right bicep circumference in inches.",
    ),
    inches(
        "0ee16da1-3c8d-48fc-9af1-41ec09cf6317",
        "Right Calf",
        "Right calf circumference in inches.",
    ),
    inches(
        "fa4c25c7-e1d5-48bf-975a-4fdfd2305646",
        "Right Forearm",
        "Right forearm circumference in inches.",
    ),
    inches(
        "843c6b0f-ce23-4468-9d67-dd1af076b10a",
        "Right Thigh",
        "Right thigh circumference in inches.",
    ),
    inches(
        "222452a2-aa29-460e-85a8-4617092d1ba5",
        "Shoulders",
        "Shoulder circumference in inches.",
    ),
    inches(
        "ed12d669-cffd-45f7-802c-9025426341fa",
        "Waist",
        "Waist circumference in inches at the belly button.",
    ),
];

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use fitdb_core::relation::RecordLookup;

    const NOW: i64 = 1_700_000_000_000;

    #[test]
    fn every_set_validates_and_imports() {
        let registry = Registry::assemble().unwrap();

        for set in SeedSet::ALL.iter().copied() {
            let mut store = MemoryStore::new(&registry);
            let report = seed(&registry, &mut store, set, NOW).unwrap();

            assert!(report.total() > 0, "{set} imported nothing");
        }
    }

    #[test]
    fn barbell_strength_counts() {
        let registry = Registry::assemble().unwrap();
        let mut store = MemoryStore::new(&registry);

        let report = seed(&registry, &mut store, SeedSet::BarbellStrength, NOW).unwrap();
        assert_eq!(report.count(RecordType::Exercise), 5);
        assert_eq!(report.count(RecordType::Workout), 2);
        assert_eq!(report.imported[0].0, RecordType::Exercise);
    }

    #[test]
    fn workouts_only_reference_seeded_exercises() {
        let registry = Registry::assemble().unwrap();

        for set in [
            SeedSet::BarbellStrength,
            SeedSet::StretchRoutine,
            SeedSet::CarpalTunnel,
            SeedSet::DeepBreathing,
        ] {
            let mut store = MemoryStore::new(&registry);
            seed(&registry, &mut store, set, NOW).unwrap();

            for workout in store.records(RecordType::Workout) {
                registry
                    .check_references(RecordType::Workout, workout, &store)
                    .unwrap();
            }
        }
    }

    #[test]
    fn seeding_twice_fails_on_duplicate_ids() {
        let registry = Registry::assemble().unwrap();
        let mut store = MemoryStore::new(&registry);

        seed(&registry, &mut store, SeedSet::DeepBreathing, NOW).unwrap();
        let err = seed(&registry, &mut store, SeedSet::DeepBreathing, NOW).unwrap_err();

        assert!(matches!(err, SeedError::Store(StoreError::DuplicateKey { .. })));
        assert!(store.contains(RecordType::Exercise, PURSED_LIP));
    }

    #[test]
    fn default_settings_cover_every_key() {
        let records = default_settings();

        assert_eq!(records.len(), SettingKey::ALL.len());
        let retention = records
            .iter()
            .find(|r| r.str_field(Field::Key) == Some("log-retention-time"))
            .unwrap();
        assert_eq!(retention.str_field(Field::Value), Some("One Year"));
    }

    #[test]
    fn slugs_round_trip() {
        for set in SeedSet::ALL.iter().copied() {
            assert_eq!(set.as_str().parse::<SeedSet>().unwrap(), set);
            assert_eq!(
                serde_json::to_value(set).unwrap(),
                Value::String(set.as_str().to_string())
            );
        }
        assert!("everything".parse::<SeedSet>().is_err());
    }
}
