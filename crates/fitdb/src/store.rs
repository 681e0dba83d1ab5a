//! Storage import boundary.
//!
//! Persistence itself lives outside this workspace. [`RecordImporter`] is the
//! one call the seed and restore flows make into it; [`MemoryStore`] is an
//! in-memory importer that honours the registry's index declarations.

use fitdb_core::{
    obs::MetricsEvent,
    record::Record,
    relation::RecordLookup,
    schema::{IndexDecl, IndexKind, Registry},
    types::{Field, RecordType},
};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use thiserror::Error as ThisError;

///
/// StoreError
///

#[remain::sorted]
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum StoreError {
    #[error("{record_type}: value {key} already taken in unique index '{field}'")]
    DuplicateKey {
        record_type: RecordType,
        field: Field,
        key: String,
    },

    #[error("{record_type}: record {index} has no value for unique index '{field}'")]
    MissingKey {
        record_type: RecordType,
        field: Field,
        index: usize,
    },
}

///
/// RecordImporter
///
/// Bulk insertion of records that already passed validation.
/// A batch is all or nothing: on error, none of its records are stored.
///

pub trait RecordImporter {
    fn import_records(
        &mut self,
        record_type: RecordType,
        records: Vec<Record>,
    ) -> Result<(), StoreError>;
}

/// Import one batch and report the outcome to the registry's sink.
/// Empty batches never reach the importer.
pub fn import_batch(
    registry: &Registry,
    importer: &mut dyn RecordImporter,
    record_type: RecordType,
    records: Vec<Record>,
) -> Result<usize, StoreError> {
    let count = records.len();
    if count == 0 {
        return Ok(0);
    }

    let sink = registry.sink();
    match importer.import_records(record_type, records) {
        Ok(()) => {
            sink.record(MetricsEvent::RecordsImported {
                record_type,
                count: count as u64,
            });
            Ok(count)
        }
        Err(err) => {
            sink.record(MetricsEvent::ImportFailed { record_type });
            Err(err)
        }
    }
}

//
// ============================================================================
// MemoryStore
// ============================================================================
//

#[derive(Debug, Default)]
struct Table {
    rows: Vec<Record>,
    last_auto_id: i64,
}

///
/// MemoryStore
///
/// One table per record type, in insertion order.
/// Unique and auto-increment indices are enforced; plain indices are not
/// materialised.
///

#[derive(Debug)]
pub struct MemoryStore {
    indices: HashMap<RecordType, &'static [IndexDecl]>,
    cascades: HashMap<RecordType, RecordType>,
    tables: HashMap<RecordType, Table>,
}

impl MemoryStore {
    /// Empty store laid out after `registry`.
    #[must_use]
    pub fn new(registry: &Registry) -> Self {
        let indices = registry
            .schemas()
            .iter()
            .map(|s| (s.record_type, s.indices))
            .collect();
        let cascades = registry
            .schemas()
            .iter()
            .filter_map(|s| {
                registry
                    .cascade_target(s.record_type)
                    .map(|child| (s.record_type, child))
            })
            .collect();

        Self {
            indices,
            cascades,
            tables: HashMap::new(),
        }
    }

    /// Stored records of a type, in insertion order.
    #[must_use]
    pub fn records(&self, record_type: RecordType) -> &[Record] {
        self.tables
            .get(&record_type)
            .map_or(&[], |t| t.rows.as_slice())
    }

    #[must_use]
    pub fn len(&self, record_type: RecordType) -> usize {
        self.records(record_type).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.values().all(|t| t.rows.is_empty())
    }

    /// Record of a type by its `id`.
    #[must_use]
    pub fn get(&self, record_type: RecordType, id: &str) -> Option<&Record> {
        self.records(record_type)
            .iter()
            .find(|r| r.id() == Some(id))
    }

    /// Delete a record by `id`, along with the children that point at it.
    /// Returns the number of records removed.
    pub fn delete(&mut self, record_type: RecordType, id: &str) -> usize {
        let mut removed = self.remove_where(record_type, |r| r.id() == Some(id));

        if removed > 0
            && let Some(child) = self.cascades.get(&record_type).copied()
        {
            removed += self.remove_where(child, |r| r.parent_id() == Some(id));
        }

        removed
    }

    fn remove_where(&mut self, record_type: RecordType, hit: impl Fn(&Record) -> bool) -> usize {
        let Some(table) = self.tables.get_mut(&record_type) else {
            return 0;
        };

        let before = table.rows.len();
        table.rows.retain(|r| !hit(r));

        before - table.rows.len()
    }
}

impl RecordImporter for MemoryStore {
    fn import_records(
        &mut self,
        record_type: RecordType,
        mut records: Vec<Record>,
    ) -> Result<(), StoreError> {
        let indices = self.indices.get(&record_type).copied().unwrap_or_default();
        let table = self.tables.entry(record_type).or_default();
        let mut last_auto_id = table.last_auto_id;

        for index in indices.iter().filter(|i| i.is_unique()) {
            let mut taken: HashSet<String> = table
                .rows
                .iter()
                .filter_map(|r| r.field(index.field))
                .map(Value::to_string)
                .collect();

            for (position, record) in records.iter_mut().enumerate() {
                let auto = index.kind == IndexKind::AutoIncrement;
                if auto && record.field(index.field).is_none() {
                    last_auto_id += 1;
                    record.set(index.field, last_auto_id);
                }

                let Some(value) = record.field(index.field) else {
                    return Err(StoreError::MissingKey {
                        record_type,
                        field: index.field,
                        index: position,
                    });
                };
                if auto && let Some(n) = value.as_i64() {
                    last_auto_id = last_auto_id.max(n);
                }

                let key = value.to_string();
                if taken.contains(&key) {
                    return Err(StoreError::DuplicateKey {
                        record_type,
                        field: index.field,
                        key,
                    });
                }
                taken.insert(key);
            }
        }

        table.rows.extend(records);
        table.last_auto_id = last_auto_id;

        Ok(())
    }
}

impl RecordLookup for MemoryStore {
    fn contains(&self, record_type: RecordType, id: &str) -> bool {
        self.get(record_type, id).is_some()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use fitdb_core::obs::CountingSink;
    use serde_json::json;
    use std::sync::Arc;

    const PARENT: &str = "43e3fc4e-b419-468c-9888-b5e072d81dfb";

    fn registry() -> Registry {
        Registry::assemble().unwrap()
    }

    fn with_id(id: &str) -> Record {
        Record::new().with(Field::Id, id)
    }

    #[test]
    fn duplicate_ids_reject_the_whole_batch() {
        let registry = registry();
        let mut store = MemoryStore::new(&registry);

        let err = store
            .import_records(RecordType::Workout, vec![with_id("a"), with_id("b"), with_id("a")])
            .unwrap_err();

        assert_eq!(
            err,
            StoreError::DuplicateKey {
                record_type: RecordType::Workout,
                field: Field::Id,
                key: "\"a\"".to_string(),
            }
        );
        assert_eq!(store.len(RecordType::Workout), 0);
    }

    #[test]
    fn ids_must_be_unique_across_batches() {
        let registry = registry();
        let mut store = MemoryStore::new(&registry);

        store
            .import_records(RecordType::Exercise, vec![with_id("a")])
            .unwrap();
        assert!(
            store
                .import_records(RecordType::Exercise, vec![with_id("a")])
                .is_err()
        );
        // same id in another table is fine
        store
            .import_records(RecordType::Workout, vec![with_id("a")])
            .unwrap();
    }

    #[test]
    fn missing_unique_key_is_rejected() {
        let registry = registry();
        let mut store = MemoryStore::new(&registry);

        let err = store
            .import_records(RecordType::Setting, vec![Record::new().with(Field::Value, true)])
            .unwrap_err();

        assert_eq!(
            err,
            StoreError::MissingKey {
                record_type: RecordType::Setting,
                field: Field::Key,
                index: 0,
            }
        );
    }

    #[test]
    fn logs_are_auto_keyed() {
        let registry = registry();
        let mut store = MemoryStore::new(&registry);
        let log = || Record::new().with(Field::Label, "Started");

        store
            .import_records(RecordType::Log, vec![log(), log().with(Field::AutoId, 10)])
            .unwrap();
        store.import_records(RecordType::Log, vec![log()]).unwrap();

        let ids: Vec<_> = store
            .records(RecordType::Log)
            .iter()
            .map(|r| r.field(Field::AutoId).cloned())
            .collect();
        assert_eq!(ids, [Some(json!(1)), Some(json!(10)), Some(json!(11))]);
    }

    #[test]
    fn deleting_a_parent_cascades_to_its_results_only() {
        let registry = registry();
        let mut store = MemoryStore::new(&registry);

        store
            .import_records(RecordType::Measurement, vec![with_id(PARENT)])
            .unwrap();
        store
            .import_records(
                RecordType::MeasurementResult,
                vec![
                    with_id("r1").with(Field::ParentId, PARENT),
                    with_id("r2").with(Field::ParentId, PARENT),
                    with_id("r3").with(Field::ParentId, "other"),
                ],
            )
            .unwrap();

        assert_eq!(store.delete(RecordType::Measurement, PARENT), 3);
        assert_eq!(store.len(RecordType::MeasurementResult), 1);
        assert_eq!(store.delete(RecordType::Measurement, PARENT), 0);
    }

    #[test]
    fn deleting_an_exercise_leaves_workouts_alone() {
        let registry = registry();
        let mut store = MemoryStore::new(&registry);

        store
            .import_records(RecordType::Exercise, vec![with_id("e")])
            .unwrap();
        store
            .import_records(
                RecordType::Workout,
                vec![with_id("w").with(Field::ExerciseIds, json!(["e"]))],
            )
            .unwrap();

        assert_eq!(store.delete(RecordType::Exercise, "e"), 1);
        assert!(store.contains(RecordType::Workout, "w"));
        assert!(!store.contains(RecordType::Exercise, "e"));
    }

    #[test]
    fn import_batch_reports_to_sink() {
        let sink = Arc::new(CountingSink::new());
        let registry = Registry::assemble_with_sink(sink.clone()).unwrap();
        let mut store = MemoryStore::new(&registry);

        let count =
            import_batch(&registry, &mut store, RecordType::Exercise, vec![with_id("a"), with_id("b")])
                .unwrap();
        assert_eq!(count, 2);
        import_batch(&registry, &mut store, RecordType::Exercise, vec![with_id("a")]).unwrap_err();
        assert_eq!(
            import_batch(&registry, &mut store, RecordType::Exercise, Vec::new()).unwrap(),
            0
        );

        let metrics = sink.snapshot();
        let exercise = metrics.get(RecordType::Exercise).unwrap();
        assert_eq!(exercise.imported, 2);
        assert_eq!(exercise.import_failures, 1);
    }
}
