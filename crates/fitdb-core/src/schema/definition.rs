use crate::{
    schema::index::IndexDecl,
    types::{Action, Field, Group, RecordType},
};

///
/// TypeDefinition
///
/// Hand-written part of a schema entry. Validators, field descriptors and
/// columns are derived from the record type during assembly.
///

#[derive(Clone, Copy, Debug)]
pub struct TypeDefinition {
    pub record_type: RecordType,
    pub group: Group,
    pub parent_type: Option<RecordType>,
    pub child_type: Option<RecordType>,
    pub indices: &'static [IndexDecl],
    pub label_singular: &'static str,
    pub label_plural: &'static str,
    pub supported_actions: &'static [Action],
    pub visible_columns: &'static [Field],
}

const PARENT_ACTIONS: &[Action] = &[
    Action::Inspect,
    Action::Create,
    Action::Edit,
    Action::Delete,
    Action::Charts,
];
const CHILD_ACTIONS: &[Action] = &[Action::Inspect, Action::Edit, Action::Delete];

const PARENT_INDICES: &[IndexDecl] = &[IndexDecl::unique(Field::Id)];
const CHILD_INDICES: &[IndexDecl] = &[IndexDecl::unique(Field::Id), IndexDecl::plain(Field::ParentId)];

const PARENT_VISIBLE: &[Field] = &[Field::Id, Field::Timestamp, Field::Name];
const CHILD_VISIBLE: &[Field] = &[Field::Id, Field::Timestamp];

const fn parent(
    record_type: RecordType,
    child_type: RecordType,
    label_singular: &'static str,
    label_plural: &'static str,
) -> TypeDefinition {
    TypeDefinition {
        record_type,
        group: Group::Parent,
        parent_type: None,
        child_type: Some(child_type),
        indices: PARENT_INDICES,
        label_singular,
        label_plural,
        supported_actions: PARENT_ACTIONS,
        visible_columns: PARENT_VISIBLE,
    }
}

const fn child(
    record_type: RecordType,
    parent_type: RecordType,
    label_singular: &'static str,
    label_plural: &'static str,
) -> TypeDefinition {
    TypeDefinition {
        record_type,
        group: Group::Child,
        parent_type: Some(parent_type),
        child_type: None,
        indices: CHILD_INDICES,
        label_singular,
        label_plural,
        supported_actions: CHILD_ACTIONS,
        visible_columns: CHILD_VISIBLE,
    }
}

/// The definition table, in registry order.
pub const DEFINITIONS: &[TypeDefinition] = &[
    TypeDefinition {
        record_type: RecordType::Log,
        group: Group::Internal,
        parent_type: None,
        child_type: None,
        indices: &[IndexDecl::auto_increment(Field::AutoId)],
        label_singular: "Log",
        label_plural: "Logs",
        supported_actions: &[Action::Inspect],
        visible_columns: &[Field::Timestamp, Field::Severity, Field::Label],
    },
    TypeDefinition {
        record_type: RecordType::Setting,
        group: Group::Internal,
        parent_type: None,
        child_type: None,
        indices: &[IndexDecl::unique(Field::Key)],
        label_singular: "Setting",
        label_plural: "Settings",
        supported_actions: &[Action::Inspect],
        visible_columns: &[Field::Key, Field::Value],
    },
    parent(RecordType::Workout, RecordType::WorkoutResult, "Workout", "Workouts"),
    parent(RecordType::Exercise, RecordType::ExerciseResult, "Exercise", "Exercises"),
    parent(
        RecordType::Measurement,
        RecordType::MeasurementResult,
        "Measurement",
        "Measurements",
    ),
    child(
        RecordType::WorkoutResult,
        RecordType::Workout,
        "Workout Result",
        "Workout Results",
    ),
    child(
        RecordType::ExerciseResult,
        RecordType::Exercise,
        "Exercise Result",
        "Exercise Results",
    ),
    child(
        RecordType::MeasurementResult,
        RecordType::Measurement,
        "Measurement Result",
        "Measurement Results",
    ),
];
