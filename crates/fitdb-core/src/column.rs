//! Table projection: one column descriptor per field.
//!
//! Columns are independent of validation. They read a value out of a record
//! and turn it into cell text; truncation here never touches the record.

use crate::{
    ID_CELL_BUDGET, TEXT_CELL_BUDGET,
    field_props::format::{PLACEHOLDER, display_date, join_items, scalar_text},
    fragment::whole_i64,
    record::Record,
    types::{Field, RecordType},
};
use serde_json::Value;

/// Names of the hidden identifier columns, in declaration order.
pub const HIDDEN_COLUMN_NAMES: &[&str] = &[HIDDEN_ID_NAME, HIDDEN_AUTO_ID_NAME];

const HIDDEN_ID_NAME: &str = "hiddenId";
const HIDDEN_AUTO_ID_NAME: &str = "hiddenAutoId";

const TEXT_SUFFIX: &str = "...";
const ID_SUFFIX: &str = "*";

///
/// Align
/// Every column renders left-aligned.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Align {
    Left,
}

///
/// TableColumn
///

#[derive(Clone, Copy, Debug)]
pub struct TableColumn {
    pub name: &'static str,
    pub field: Field,
    pub label: &'static str,
    pub align: Align,
    pub sortable: bool,
    pub required: bool,
    pub hidden: bool,
    pub format: fn(Option<&Value>) -> String,
}

impl TableColumn {
    /// Visible, sortable, left-aligned column named after its field.
    #[must_use]
    pub const fn standard(
        field: Field,
        label: &'static str,
        format: fn(Option<&Value>) -> String,
    ) -> Self {
        Self {
            name: field.as_str(),
            field,
            label,
            align: Align::Left,
            sortable: true,
            required: false,
            hidden: false,
            format,
        }
    }

    /// Identifier column needed by row actions but never shown.
    #[must_use]
    pub const fn hidden(field: Field, name: &'static str) -> Self {
        Self {
            name,
            field,
            label: "",
            align: Align::Left,
            sortable: false,
            required: true,
            hidden: true,
            format: cell_raw,
        }
    }

    /// Raw value this column reads from a record.
    #[must_use]
    pub fn value<'a>(&self, record: &'a Record) -> Option<&'a Value> {
        record.field(self.field)
    }

    /// Cell text for a record.
    #[must_use]
    pub fn render(&self, record: &Record) -> String {
        (self.format)(self.value(record))
    }
}

/// Clip `text` to `budget` characters, appending `suffix` when clipped.
#[must_use]
pub fn truncate(text: &str, budget: usize, suffix: &str) -> String {
    match text.char_indices().nth(budget) {
        Some((cut, _)) => format!("{}{suffix}", &text[..cut]),
        None => text.to_string(),
    }
}

/// Ordered columns of a record type: hidden identifier first, then the
/// standard columns in the same group order as the field descriptors.
#[must_use]
pub fn type_columns(ty: RecordType) -> Vec<&'static TableColumn> {
    let hidden: Option<&'static TableColumn> = match ty {
        RecordType::Log => Some(&HIDDEN_AUTO_ID),
        RecordType::Setting => None,
        _ => Some(&HIDDEN_ID),
    };
    let groups: [&'static [&'static TableColumn]; 3] = match ty {
        RecordType::Log => [LOG, &[], &[]],
        RecordType::Setting => [SETTING, &[], &[]],
        RecordType::Workout => [CORE, PARENT, WORKOUT],
        RecordType::Exercise => [CORE, PARENT, EXERCISE],
        RecordType::Measurement => [CORE, PARENT, MEASUREMENT],
        RecordType::WorkoutResult => [CORE, CHILD, WORKOUT_RESULT],
        RecordType::ExerciseResult => [CORE, CHILD, EXERCISE_RESULT],
        RecordType::MeasurementResult => [CORE, CHILD, MEASUREMENT_RESULT],
    };

    hidden
        .into_iter()
        .chain(groups.into_iter().flatten().copied())
        .collect()
}

//
// ============================================================================
// Cell formatters
// ============================================================================
//

fn cell_raw(value: Option<&Value>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), scalar_text)
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => truncate(s, TEXT_CELL_BUDGET, TEXT_SUFFIX),
        other => cell_raw(other),
    }
}

fn cell_id(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => truncate(s, ID_CELL_BUDGET, ID_SUFFIX),
        other => cell_raw(other),
    }
}

fn cell_json(value: Option<&Value>) -> String {
    match value {
        None => PLACEHOLDER.to_string(),
        Some(value) => truncate(&value.to_string(), TEXT_CELL_BUDGET, TEXT_SUFFIX),
    }
}

fn cell_date(value: Option<&Value>) -> String {
    value
        .and_then(whole_i64)
        .and_then(display_date)
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

fn cell_yes_no(value: Option<&Value>) -> String {
    if value.and_then(Value::as_bool).unwrap_or(false) {
        "Yes".to_string()
    } else {
        "No".to_string()
    }
}

fn cell_list(value: Option<&Value>) -> String {
    match value {
        Some(Value::Array(items)) => truncate(&join_items(items), TEXT_CELL_BUDGET, TEXT_SUFFIX),
        other => cell_raw(other),
    }
}

fn cell_pair(value: Option<&Value>) -> String {
    match value {
        Some(Value::Array(items)) => join_items(items),
        other => cell_raw(other),
    }
}

fn with_unit(value: Option<&Value>, unit: &str) -> String {
    match value {
        Some(value @ Value::Number(_)) => format!("{}{unit}", scalar_text(value)),
        other => cell_raw(other),
    }
}

fn cell_percent(value: Option<&Value>) -> String {
    with_unit(value, "%")
}

fn cell_inches(value: Option<&Value>) -> String {
    with_unit(value, " in")
}

fn cell_lbs(value: Option<&Value>) -> String {
    with_unit(value, " lbs")
}

//
// ============================================================================
// Columns
// ============================================================================
//

static HIDDEN_ID: TableColumn = TableColumn::hidden(Field::Id, HIDDEN_ID_NAME);
static HIDDEN_AUTO_ID: TableColumn = TableColumn::hidden(Field::AutoId, HIDDEN_AUTO_ID_NAME);

// log
static AUTO_ID: TableColumn = TableColumn::standard(Field::AutoId, "Auto Id", cell_raw);
static SEVERITY: TableColumn = TableColumn::standard(Field::Severity, "Severity", cell_raw);
static LABEL: TableColumn = TableColumn::standard(Field::Label, "Label", cell_text);
static DETAILS: TableColumn = TableColumn::standard(Field::Details, "Details", cell_json);
static MESSAGE: TableColumn = TableColumn::standard(Field::Message, "Message", cell_text);
static STACK: TableColumn = TableColumn::standard(Field::Stack, "Stack", cell_text);

// setting
static KEY: TableColumn = TableColumn::standard(Field::Key, "Key", cell_raw);
static VALUE: TableColumn = TableColumn::standard(Field::Value, "Value", cell_json);

// core
static ID: TableColumn = TableColumn::standard(Field::Id, "Id*", cell_id);
static TIMESTAMP: TableColumn = TableColumn::standard(Field::Timestamp, "Created Date", cell_date);

// parent
static NAME: TableColumn = TableColumn::standard(Field::Name, "Name", cell_text);
static DESC: TableColumn = TableColumn::standard(Field::Desc, "Description", cell_text);
static ENABLED: TableColumn = TableColumn::standard(Field::Enabled, "Enabled", cell_yes_no);
static FAVORITED: TableColumn = TableColumn::standard(Field::Favorited, "Favorited", cell_yes_no);

// child
static PARENT_ID: TableColumn = TableColumn::standard(Field::ParentId, "Parent Id*", cell_id);
static NOTE: TableColumn = TableColumn::standard(Field::Note, "Note", cell_text);
static ACTIVE: TableColumn = TableColumn::standard(Field::Active, "Active", cell_yes_no);

// parent types
static EXERCISE_IDS: TableColumn =
    TableColumn::standard(Field::ExerciseIds, "Exercise Ids", cell_list);
static EXERCISE_INPUTS: TableColumn =
    TableColumn::standard(Field::ExerciseInputs, "Exercise Inputs", cell_list);
static MEASUREMENT_INPUT: TableColumn =
    TableColumn::standard(Field::MeasurementInput, "Measurement Input", cell_raw);

// workout result
static FINISHED_TIMESTAMP: TableColumn =
    TableColumn::standard(Field::FinishedTimestamp, "Finished Date", cell_date);
static EXERCISE_RESULT_IDS: TableColumn =
    TableColumn::standard(Field::ExerciseResultIds, "Exercise Result Ids", cell_list);

// exercise result
static REPS: TableColumn = TableColumn::standard(Field::Reps, "Reps", cell_list);
static WEIGHT_LBS: TableColumn = TableColumn::standard(Field::WeightLbs, "Weight (lbs)", cell_list);
static DISTANCE_MILES: TableColumn =
    TableColumn::standard(Field::DistanceMiles, "Distance (miles)", cell_list);
static DURATION_MINUTES: TableColumn =
    TableColumn::standard(Field::DurationMinutes, "Duration (minutes)", cell_list);
static WATTS: TableColumn = TableColumn::standard(Field::Watts, "Watts", cell_list);
static SPEED_MPH: TableColumn = TableColumn::standard(Field::SpeedMph, "Speed (mph)", cell_list);
static CALORIES: TableColumn = TableColumn::standard(Field::Calories, "Calories Burned", cell_list);
static RESISTANCE: TableColumn = TableColumn::standard(Field::Resistance, "Resistance", cell_list);

// measurement result
static HEIGHT_WEIGHT_LBS: TableColumn =
    TableColumn::standard(Field::HeightWeightLbs, "Height/Weight (lbs)", cell_pair);
static PERCENT: TableColumn = TableColumn::standard(Field::Percent, "Percentage", cell_percent);
static INCHES: TableColumn = TableColumn::standard(Field::Inches, "Inches", cell_inches);
static LBS: TableColumn = TableColumn::standard(Field::Lbs, "Pounds", cell_lbs);

// groups
static LOG: &[&TableColumn] = &[
    &AUTO_ID, &TIMESTAMP, &SEVERITY, &LABEL, &DETAILS, &MESSAGE, &STACK,
];
static SETTING: &[&TableColumn] = &[&KEY, &VALUE];
static CORE: &[&TableColumn] = &[&ID, &TIMESTAMP];
static PARENT: &[&TableColumn] = &[&NAME, &DESC, &ENABLED, &FAVORITED];
static CHILD: &[&TableColumn] = &[&PARENT_ID, &NOTE, &ACTIVE];
static WORKOUT: &[&TableColumn] = &[&EXERCISE_IDS];
static EXERCISE: &[&TableColumn] = &[&EXERCISE_INPUTS];
static MEASUREMENT: &[&TableColumn] = &[&MEASUREMENT_INPUT];
static WORKOUT_RESULT: &[&TableColumn] = &[&FINISHED_TIMESTAMP, &EXERCISE_RESULT_IDS];
static EXERCISE_RESULT: &[&TableColumn] = &[
    &REPS,
    &WEIGHT_LBS,
    &DISTANCE_MILES,
    &DURATION_MINUTES,
    &WATTS,
    &SPEED_MPH,
    &CALORIES,
    &RESISTANCE,
];
static MEASUREMENT_RESULT: &[&TableColumn] = &[&HEIGHT_WEIGHT_LBS, &PERCENT, &INCHES, &LBS];

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn truncate_respects_budget_and_characters() {
        assert_eq!(truncate("short", 40, "..."), "short");
        assert_eq!(truncate("50c1fc75-0975-45f8", 8, "*"), "50c1fc75*");
        assert_eq!(truncate("äöüäöü", 3, "..."), "äöü...");
        assert_eq!(truncate(&"x".repeat(40), 40, "..."), "x".repeat(40));
    }

    #[test]
    fn truncation_does_not_touch_the_record() {
        let long = "a".repeat(60);
        let record = Record::new().with(Field::Name, long.clone());

        assert_eq!(NAME.render(&record), format!("{}...", "a".repeat(40)));
        assert_eq!(record.str_field(Field::Name), Some(long.as_str()));
    }

    #[test]
    fn hidden_columns_only_carry_identifiers() {
        for ty in RecordType::ALL {
            for column in type_columns(*ty).iter().filter(|c| c.hidden) {
                assert!(column.field.is_identifier(), "{} hides {}", ty, column.field);
                assert!(HIDDEN_COLUMN_NAMES.contains(&column.name));
            }
        }
        assert_eq!(HIDDEN_COLUMN_NAMES, ["hiddenId", "hiddenAutoId"]);
    }

    #[test]
    fn standard_cells() {
        let record = Record::new()
            .with(Field::Enabled, true)
            .with(Field::Reps, json!([5, 5, 3]))
            .with(Field::Inches, 14.5)
            .with(Field::Value, json!({ "a": 1 }));

        assert_eq!(ENABLED.render(&record), "Yes");
        assert_eq!(FAVORITED.render(&record), "No");
        assert_eq!(REPS.render(&record), "5, 5, 3");
        assert_eq!(INCHES.render(&record), "14.5 in");
        assert_eq!(VALUE.render(&record), "{\"a\":1}");
        assert_eq!(LBS.render(&record), "-");
    }

    #[test]
    fn every_column_is_left_aligned() {
        for ty in RecordType::ALL.iter().copied() {
            assert!(type_columns(ty).iter().all(|c| c.align == Align::Left));
        }
    }

    #[test]
    fn date_cells_read_whole_float_timestamps() {
        let record = Record::new().with(Field::Timestamp, 1_700_000_000_000.0);

        assert_eq!(TIMESTAMP.render(&record), "Tue, Nov 14, 2023, 10:13 PM");
        assert_eq!(FINISHED_TIMESTAMP.render(&record), "-");
    }

    #[test]
    fn columns_start_with_hidden_identifier() {
        let names: Vec<_> = type_columns(RecordType::Workout)
            .iter()
            .map(|c| c.name)
            .collect();

        assert_eq!(
            names,
            [
                "hiddenId",
                "id",
                "timestamp",
                "name",
                "desc",
                "enabled",
                "favorited",
                "exerciseIds"
            ]
        );
        assert!(type_columns(RecordType::Setting).iter().all(|c| !c.hidden));
    }
}
