//! Type schema registry.
//!
//! One [`TypeSchema`] per record type, assembled once from the definition
//! table plus the derived validators, descriptors and columns. The assembled
//! [`Registry`] is read-only and is handed to every consumer by reference.

pub mod definition;
pub mod index;
pub mod integrity;

pub use definition::{DEFINITIONS, TypeDefinition};
pub use index::{IndexDecl, IndexKind, render_indices};
pub use integrity::{IntegrityErrors, SchemaIntegrityError};

use crate::{
    column::{self, HIDDEN_COLUMN_NAMES, TableColumn},
    field_props::{self, FieldProps},
    obs::{MetricsEvent, MetricsSink, NoopSink},
    record::Record,
    relation::{self, CROSS_REFERENCES, RecordLookup, Relation, RelationKind},
    types::{Action, Field, Group, RecordType},
    validate::{RecordValidator, ValidationErrors},
};
use serde::Serialize;
use std::{fmt, sync::Arc};

///
/// TypeSchema
///

#[derive(Clone, Debug)]
pub struct TypeSchema {
    pub record_type: RecordType,
    pub group: Group,
    pub parent_type: Option<RecordType>,
    pub child_type: Option<RecordType>,
    pub indices: &'static [IndexDecl],
    pub label_singular: &'static str,
    pub label_plural: &'static str,
    pub validator: RecordValidator,
    pub supported_actions: &'static [Action],
    pub visible_columns: &'static [Field],
    pub table_columns: Vec<&'static TableColumn>,
    pub field_props: Vec<&'static FieldProps>,
}

impl TypeSchema {
    /// Derive the full entry for a hand-written definition.
    #[must_use]
    pub fn from_definition(def: &TypeDefinition) -> Self {
        Self {
            record_type: def.record_type,
            group: def.group,
            parent_type: def.parent_type,
            child_type: def.child_type,
            indices: def.indices,
            label_singular: def.label_singular,
            label_plural: def.label_plural,
            validator: RecordValidator::for_type(def.record_type),
            supported_actions: def.supported_actions,
            visible_columns: def.visible_columns,
            table_columns: column::type_columns(def.record_type),
            field_props: field_props::type_fields(def.record_type),
        }
    }

    /// Index declaration string consumed verbatim by the storage engine.
    #[must_use]
    pub fn database_indices(&self) -> String {
        render_indices(self.indices)
    }

    #[must_use]
    pub fn supports(&self, action: Action) -> bool {
        self.supported_actions.contains(&action)
    }

    #[must_use]
    pub fn field_props_for(&self, field: Field) -> Option<&'static FieldProps> {
        self.field_props.iter().copied().find(|p| p.field == field)
    }

    /// Descriptor fields, in concatenation order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.field_props.iter().map(|p| p.field)
    }

    #[must_use]
    pub fn declares(&self, field: Field) -> bool {
        self.fields().any(|f| f == field)
    }

    /// Columns that are shown, in `visible_columns` order.
    #[must_use]
    pub fn visible_table_columns(&self) -> Vec<&'static TableColumn> {
        self.visible_columns
            .iter()
            .filter_map(|field| {
                self.table_columns
                    .iter()
                    .copied()
                    .find(|c| !c.hidden && c.field == *field)
            })
            .collect()
    }

    /// Fresh record from every descriptor that produces a default.
    #[must_use]
    pub fn defaults(&self) -> Record {
        let mut record = Record::new();
        for props in &self.field_props {
            if let Some(value) = props.default_value() {
                record.set(props.field, value);
            }
        }

        record
    }

    #[must_use]
    pub const fn is_parent(&self) -> bool {
        matches!(self.group, Group::Parent)
    }

    #[must_use]
    pub const fn is_child(&self) -> bool {
        matches!(self.group, Group::Child)
    }
}

///
/// TypeOption
/// Value/label pair for type pickers.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct TypeOption {
    pub value: RecordType,
    pub label: &'static str,
}

impl From<&TypeSchema> for TypeOption {
    fn from(schema: &TypeSchema) -> Self {
        Self {
            value: schema.record_type,
            label: schema.label_plural,
        }
    }
}

///
/// Registry
///
/// Assembled once, then only queried. Lookups are keyed by record type and
/// never fail on an assembled registry, since assembly rejects any table with
/// a missing entry.
///

pub struct Registry {
    schemas: Vec<TypeSchema>,
    relations: Vec<Relation>,
    sink: Arc<dyn MetricsSink>,
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("schemas", &self.schemas)
            .field("relations", &self.relations)
            .finish_non_exhaustive()
    }
}

impl Registry {
    /// Assemble the standard registry with metrics discarded.
    pub fn assemble() -> Result<Self, IntegrityErrors> {
        Self::assemble_with_sink(Arc::new(NoopSink))
    }

    /// Assemble the standard registry, reporting validations to `sink`.
    pub fn assemble_with_sink(sink: Arc<dyn MetricsSink>) -> Result<Self, IntegrityErrors> {
        Self::from_definitions(DEFINITIONS, sink)
    }

    /// Assemble from an arbitrary definition table.
    pub fn from_definitions(
        definitions: &[TypeDefinition],
        sink: Arc<dyn MetricsSink>,
    ) -> Result<Self, IntegrityErrors> {
        let schemas = definitions
            .iter()
            .map(TypeSchema::from_definition)
            .collect();

        Self::from_schemas(schemas, sink)
    }

    /// Assemble from fully built schema entries.
    pub fn from_schemas(
        mut schemas: Vec<TypeSchema>,
        sink: Arc<dyn MetricsSink>,
    ) -> Result<Self, IntegrityErrors> {
        schemas.sort_by_key(|s| s.record_type.index());

        let relations = schemas
            .iter()
            .filter(|s| s.is_child())
            .filter_map(|s| {
                s.parent_type
                    .map(|parent| Relation::parent_child(s.record_type, parent))
            })
            .chain(CROSS_REFERENCES.iter().copied())
            .collect::<Vec<_>>();

        integrity::check(&schemas, &relations)?;

        Ok(Self {
            schemas,
            relations,
            sink,
        })
    }

    //
    // ------------------------------------------------------------------------
    // Lookups
    // ------------------------------------------------------------------------
    //

    /// Entry for a record type.
    #[must_use]
    pub fn schema(&self, record_type: RecordType) -> &TypeSchema {
        // assembly guarantees exactly one entry per type, sorted by index
        &self.schemas[record_type.index()]
    }

    /// Every entry, in record type order.
    #[must_use]
    pub fn schemas(&self) -> &[TypeSchema] {
        &self.schemas
    }

    #[must_use]
    pub fn label_singular(&self, record_type: RecordType) -> &'static str {
        self.schema(record_type).label_singular
    }

    #[must_use]
    pub fn label_plural(&self, record_type: RecordType) -> &'static str {
        self.schema(record_type).label_plural
    }

    #[must_use]
    pub fn table_columns(&self, record_type: RecordType) -> &[&'static TableColumn] {
        &self.schema(record_type).table_columns
    }

    #[must_use]
    pub fn visible_columns(&self, record_type: RecordType) -> &'static [Field] {
        self.schema(record_type).visible_columns
    }

    #[must_use]
    pub fn supported_actions(&self, record_type: RecordType) -> &'static [Action] {
        self.schema(record_type).supported_actions
    }

    #[must_use]
    pub fn field_props(&self, record_type: RecordType) -> &[&'static FieldProps] {
        &self.schema(record_type).field_props
    }

    #[must_use]
    pub fn indices(&self, record_type: RecordType) -> &'static [IndexDecl] {
        self.schema(record_type).indices
    }

    #[must_use]
    pub fn database_indices(&self, record_type: RecordType) -> String {
        self.schema(record_type).database_indices()
    }

    #[must_use]
    pub fn group(&self, record_type: RecordType) -> Group {
        self.schema(record_type).group
    }

    #[must_use]
    pub fn parent_type(&self, record_type: RecordType) -> Option<RecordType> {
        self.schema(record_type).parent_type
    }

    #[must_use]
    pub fn child_type(&self, record_type: RecordType) -> Option<RecordType> {
        self.schema(record_type).child_type
    }

    #[must_use]
    pub fn validator(&self, record_type: RecordType) -> &RecordValidator {
        &self.schema(record_type).validator
    }

    /// Fresh record for a type, every default filled in.
    #[must_use]
    pub fn defaults(&self, record_type: RecordType) -> Record {
        self.schema(record_type).defaults()
    }

    /// Type picker options, labelled with the plural label.
    #[must_use]
    pub fn type_options(&self) -> Vec<TypeOption> {
        self.schemas.iter().map(TypeOption::from).collect()
    }

    #[must_use]
    pub fn parent_type_options(&self) -> Vec<TypeOption> {
        self.parent_schemas().map(TypeOption::from).collect()
    }

    #[must_use]
    pub fn parent_types(&self) -> Vec<RecordType> {
        self.parent_schemas().map(|s| s.record_type).collect()
    }

    pub fn parent_schemas(&self) -> impl Iterator<Item = &TypeSchema> {
        self.schemas.iter().filter(|s| s.is_parent())
    }

    /// Column names that identify rows but are never shown.
    #[must_use]
    pub const fn hidden_column_names(&self) -> &'static [&'static str] {
        HIDDEN_COLUMN_NAMES
    }

    //
    // ------------------------------------------------------------------------
    // Relations
    // ------------------------------------------------------------------------
    //

    #[must_use]
    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    /// Relations whose id field lives on `record_type`.
    pub fn outgoing_relations(&self, record_type: RecordType) -> impl Iterator<Item = &Relation> {
        self.relations.iter().filter(move |r| r.source == record_type)
    }

    /// Relations pointing at `record_type`.
    pub fn incoming_relations(&self, record_type: RecordType) -> impl Iterator<Item = &Relation> {
        self.relations.iter().filter(move |r| r.target == record_type)
    }

    /// Type whose records are deleted along with a record of `record_type`.
    #[must_use]
    pub fn cascade_target(&self, record_type: RecordType) -> Option<RecordType> {
        self.incoming_relations(record_type)
            .find(|r| r.cascades_on_delete())
            .map(|r| r.source)
    }

    /// Check every id `record` points at against `lookup`.
    pub fn check_references(
        &self,
        record_type: RecordType,
        record: &Record,
        lookup: &dyn RecordLookup,
    ) -> Result<(), ValidationErrors> {
        let errors =
            relation::dangling_references(self.outgoing_relations(record_type), record, lookup);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors::new(errors))
        }
    }

    /// Check only the `parentId` link of `record` against `lookup`.
    pub fn check_parent_link(
        &self,
        record_type: RecordType,
        record: &Record,
        lookup: &dyn RecordLookup,
    ) -> Result<(), ValidationErrors> {
        let links = self
            .outgoing_relations(record_type)
            .filter(|r| r.kind == RelationKind::ParentChild);
        let errors = relation::dangling_references(links, record, lookup);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors::new(errors))
        }
    }

    //
    // ------------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------------
    //

    /// Validate a record against its type's composite validator.
    pub fn validate(
        &self,
        record_type: RecordType,
        record: &Record,
    ) -> Result<Record, ValidationErrors> {
        let result = self.validator(record_type).validate(record);

        let event = match &result {
            Ok(_) => MetricsEvent::RecordValidated { record_type },
            Err(errors) => MetricsEvent::RecordRejected {
                record_type,
                field_errors: errors.len() as u64,
            },
        };
        self.sink.record(event);

        result
    }

    /// Shared handle to the metrics sink, for collaborators that report
    /// their own events.
    #[must_use]
    pub fn sink(&self) -> Arc<dyn MetricsSink> {
        Arc::clone(&self.sink)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        obs::CountingSink,
        test_support::{MEASUREMENT_ID, exercise, measurement_result, workout},
    };
    use proptest::prelude::*;
    use serde_json::json;
    use std::collections::HashSet;

    fn registry() -> Registry {
        Registry::assemble().unwrap()
    }

    struct Known(HashSet<(RecordType, String)>);

    impl RecordLookup for Known {
        fn contains(&self, record_type: RecordType, id: &str) -> bool {
            self.0.contains(&(record_type, id.to_string()))
        }
    }

    #[test]
    fn standard_table_assembles() {
        let registry = registry();

        assert_eq!(registry.schemas().len(), RecordType::ALL.len());
        for ty in RecordType::ALL {
            assert_eq!(registry.schema(*ty).record_type, *ty);
        }
    }

    #[test]
    fn links_are_symmetric() {
        let registry = registry();

        for ty in RecordType::ALL.iter().copied() {
            if let Some(parent) = registry.parent_type(ty) {
                assert_eq!(registry.child_type(parent), Some(ty));
            }
            if let Some(child) = registry.child_type(ty) {
                assert_eq!(registry.parent_type(child), Some(ty));
            }
        }
    }

    #[test]
    fn database_indices_match_storage_layout() {
        let registry = registry();

        assert_eq!(registry.database_indices(RecordType::Log), "++autoId");
        assert_eq!(registry.database_indices(RecordType::Setting), "&key");
        assert_eq!(registry.database_indices(RecordType::Workout), "&id");
        assert_eq!(
            registry.database_indices(RecordType::MeasurementResult),
            "&id, parentId"
        );
    }

    #[test]
    fn labels_and_actions() {
        let registry = registry();

        assert_eq!(registry.label_singular(RecordType::ExerciseResult), "Exercise Result");
        assert_eq!(registry.label_plural(RecordType::Workout), "Workouts");
        assert!(registry.schema(RecordType::Workout).supports(Action::Charts));
        assert!(!registry.schema(RecordType::WorkoutResult).supports(Action::Create));
        assert_eq!(registry.supported_actions(RecordType::Log), [Action::Inspect]);
    }

    #[test]
    fn parent_options_are_plural_labelled() {
        let registry = registry();

        assert_eq!(
            registry.parent_type_options(),
            [
                TypeOption {
                    value: RecordType::Workout,
                    label: "Workouts"
                },
                TypeOption {
                    value: RecordType::Exercise,
                    label: "Exercises"
                },
                TypeOption {
                    value: RecordType::Measurement,
                    label: "Measurements"
                },
            ]
        );
        assert_eq!(registry.type_options().len(), RecordType::ALL.len());

        let json = serde_json::to_value(registry.type_options()[0]).unwrap();
        assert_eq!(json, json!({ "value": "log", "label": "Logs" }));
    }

    #[test]
    fn visible_columns_resolve_to_table_columns() {
        let registry = registry();
        let schema = registry.schema(RecordType::Log);

        let names: Vec<_> = schema
            .visible_table_columns()
            .iter()
            .map(|c| c.field)
            .collect();
        assert_eq!(names, [Field::Timestamp, Field::Severity, Field::Label]);
    }

    #[test]
    fn defaults_of_every_type_are_accepted_field_by_field() {
        let registry = registry();

        for schema in registry.schemas() {
            for props in &schema.field_props {
                if let Some(value) = props.default_value() {
                    assert!(
                        props.validator.accepts(&value),
                        "{}: default of {} rejected",
                        schema.record_type,
                        props.field
                    );
                }
            }
        }
    }

    #[test]
    fn exercise_defaults_plus_name_validate() {
        let registry = registry();
        let record = registry
            .defaults(RecordType::Exercise)
            .with(Field::Name, "Plank")
            .with(Field::ExerciseInputs, json!(["durationMinutes"]));

        let out = registry.validate(RecordType::Exercise, &record).unwrap();
        assert_eq!(out.field(Field::Enabled), Some(&json!(true)));
        assert_eq!(out.field(Field::Favorited), Some(&json!(false)));
        assert_eq!(out.str_field(Field::Desc), Some(""));
    }

    #[test]
    fn validate_reports_to_sink() {
        let sink = Arc::new(CountingSink::new());
        let registry = Registry::assemble_with_sink(sink.clone()).unwrap();

        registry.validate(RecordType::Exercise, &exercise()).unwrap();
        let mut bad = workout();
        bad.insert("foo".to_string(), json!(1));
        registry.validate(RecordType::Workout, &bad).unwrap_err();

        let snapshot = sink.snapshot();
        assert_eq!(snapshot.get(RecordType::Exercise).unwrap().validated, 1);
        let workouts = snapshot.get(RecordType::Workout).unwrap();
        assert_eq!(workouts.rejected, 1);
        assert_eq!(workouts.field_errors, 1);
    }

    #[test]
    fn relations_keep_kinds_apart() {
        let registry = registry();

        assert_eq!(
            registry.cascade_target(RecordType::Exercise),
            Some(RecordType::ExerciseResult)
        );
        assert_eq!(registry.cascade_target(RecordType::ExerciseResult), None);

        let incoming: Vec<_> = registry.incoming_relations(RecordType::Exercise).collect();
        assert_eq!(incoming.len(), 2);
        assert_eq!(
            incoming
                .iter()
                .filter(|r| r.cascades_on_delete())
                .count(),
            1
        );
    }

    #[test]
    fn dangling_workout_exercise_is_reported() {
        let registry = registry();
        let record = workout();
        let ids: Vec<String> = record
            .field(Field::ExerciseIds)
            .and_then(|v| v.as_array())
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap().to_string())
            .collect();

        let none = Known(HashSet::new());
        let errors = registry
            .check_references(RecordType::Workout, &record, &none)
            .unwrap_err();
        assert_eq!(errors.len(), ids.len());
        assert!(errors.iter().all(|e| e.key() == "exerciseIds"));

        let all = Known(
            ids.into_iter()
                .map(|id| (RecordType::Exercise, id))
                .collect(),
        );
        assert!(
            registry
                .check_references(RecordType::Workout, &record, &all)
                .is_ok()
        );
    }

    #[test]
    fn parent_link_check_ignores_cross_references() {
        let registry = registry();
        let none = Known(HashSet::new());

        let errors = registry
            .check_parent_link(RecordType::MeasurementResult, &measurement_result(), &none)
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].key(), "parentId");

        let parent = Known(HashSet::from([(
            RecordType::Measurement,
            MEASUREMENT_ID.to_string(),
        )]));
        assert!(
            registry
                .check_parent_link(RecordType::MeasurementResult, &measurement_result(), &parent)
                .is_ok()
        );

        // workouts only carry a cross-reference
        assert!(
            registry
                .check_parent_link(RecordType::Workout, &workout(), &none)
                .is_ok()
        );
    }

    //
    // Integrity failures
    //

    fn errors_of(definitions: &[TypeDefinition]) -> Vec<SchemaIntegrityError> {
        Registry::from_definitions(definitions, Arc::new(NoopSink))
            .unwrap_err()
            .errors()
            .to_vec()
    }

    #[test]
    fn missing_definition_is_fatal() {
        let errors = errors_of(&DEFINITIONS[1..]);

        assert!(errors.contains(&SchemaIntegrityError::MissingDefinition {
            record_type: RecordType::Log
        }));
    }

    #[test]
    fn asymmetric_link_is_fatal() {
        let mut definitions = DEFINITIONS.to_vec();
        let workout = definitions
            .iter_mut()
            .find(|d| d.record_type == RecordType::Workout)
            .unwrap();
        workout.child_type = Some(RecordType::ExerciseResult);

        let errors = errors_of(&definitions);
        assert!(errors.contains(&SchemaIntegrityError::LinkNotSymmetric {
            record_type: RecordType::Workout,
            linked: RecordType::ExerciseResult,
        }));
        assert!(errors.contains(&SchemaIntegrityError::LinkNotSymmetric {
            record_type: RecordType::WorkoutResult,
            linked: RecordType::Workout,
        }));
    }

    #[test]
    fn parent_without_child_is_fatal() {
        let mut definitions = DEFINITIONS.to_vec();
        let measurement = definitions
            .iter_mut()
            .find(|d| d.record_type == RecordType::Measurement)
            .unwrap();
        measurement.child_type = None;

        let errors = errors_of(&definitions);
        assert!(errors.contains(&SchemaIntegrityError::MissingLink {
            record_type: RecordType::Measurement,
            group: Group::Parent,
            link: "child",
        }));
    }

    #[test]
    fn child_without_parent_index_is_fatal() {
        const ONLY_ID: &[IndexDecl] = &[IndexDecl::unique(Field::Id)];

        let mut definitions = DEFINITIONS.to_vec();
        let result = definitions
            .iter_mut()
            .find(|d| d.record_type == RecordType::ExerciseResult)
            .unwrap();
        result.indices = ONLY_ID;

        let errors = errors_of(&definitions);
        assert_eq!(
            errors,
            [SchemaIntegrityError::MissingParentIndex {
                record_type: RecordType::ExerciseResult
            }]
        );
    }

    #[test]
    fn unknown_visible_column_is_fatal() {
        let mut definitions = DEFINITIONS.to_vec();
        let setting = definitions
            .iter_mut()
            .find(|d| d.record_type == RecordType::Setting)
            .unwrap();
        setting.visible_columns = &[Field::Key, Field::Name];

        let errors = errors_of(&definitions);
        assert!(errors.contains(&SchemaIntegrityError::VisibleColumnUnknown {
            record_type: RecordType::Setting,
            field: Field::Name,
        }));
    }

    #[test]
    fn descriptor_drift_is_fatal() {
        let mut schemas: Vec<_> = DEFINITIONS.iter().map(TypeSchema::from_definition).collect();
        let exercise = schemas
            .iter_mut()
            .find(|s| s.record_type == RecordType::Exercise)
            .unwrap();
        exercise.field_props.swap(2, 3);
        exercise.field_props.push(field_props::get(Field::Name));

        let errors = Registry::from_schemas(schemas, Arc::new(NoopSink))
            .unwrap_err()
            .errors()
            .to_vec();

        assert!(errors.contains(&SchemaIntegrityError::DuplicateField {
            record_type: RecordType::Exercise,
            field: Field::Name,
        }));
        assert!(errors.contains(&SchemaIntegrityError::ValidatorMismatch {
            record_type: RecordType::Exercise
        }));
        assert!(errors.contains(&SchemaIntegrityError::StandardColumnsMismatch {
            record_type: RecordType::Exercise
        }));
    }

    #[test]
    fn integrity_errors_render_every_violation() {
        let mut definitions = DEFINITIONS.to_vec();
        definitions.push(DEFINITIONS[0]);

        let text = Registry::from_definitions(&definitions, Arc::new(NoopSink))
            .unwrap_err()
            .to_string();
        assert_eq!(
            text,
            "schema integrity check failed (1 errors); log: defined 2 times"
        );
    }

    proptest! {
        #[test]
        fn lookups_agree_with_schema_entries(i in 0usize..8) {
            let registry = registry();
            let ty = RecordType::ALL[i];
            let schema = registry.schema(ty);

            prop_assert_eq!(registry.group(ty), schema.group);
            prop_assert_eq!(registry.field_props(ty).len(), schema.field_props.len());
            prop_assert!(schema.validator.fields().eq(schema.fields()));
            prop_assert_eq!(registry.validator(ty).record_type(), ty);
        }
    }
}
