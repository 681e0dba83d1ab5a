//! Backup files and restore.
//!
//! A backup is one JSON document holding every table under its record type
//! slug. Restore re-validates each record through the registry; only the
//! records that pass are imported, and the rest are reported back.

use crate::store::{self, RecordImporter, StoreError};
use fitdb_core::{
    APP_NAME,
    record::Record,
    relation::RecordLookup,
    schema::Registry,
    types::{Group, RecordType},
    validate::ValidationErrors,
};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use thiserror::Error as ThisError;

///
/// BackupError
///

#[remain::sorted]
#[derive(Debug, ThisError)]
pub enum BackupError {
    #[error("backup belongs to another application ('{found}')")]
    ForeignApp { found: String },

    #[error("backup is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

///
/// BackupData
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupData {
    pub app_name: String,
    pub backup_timestamp: i64,

    #[serde(default)]
    pub log: Vec<Record>,
    #[serde(default)]
    pub setting: Vec<Record>,
    #[serde(default)]
    pub workout: Vec<Record>,
    #[serde(default)]
    pub exercise: Vec<Record>,
    #[serde(default)]
    pub measurement: Vec<Record>,
    #[serde(default, rename = "workout-result")]
    pub workout_result: Vec<Record>,
    #[serde(default, rename = "exercise-result")]
    pub exercise_result: Vec<Record>,
    #[serde(default, rename = "measurement-result")]
    pub measurement_result: Vec<Record>,
}

impl BackupData {
    /// Empty backup for this application.
    #[must_use]
    pub fn new(backup_timestamp: i64) -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            backup_timestamp,
            log: Vec::new(),
            setting: Vec::new(),
            workout: Vec::new(),
            exercise: Vec::new(),
            measurement: Vec::new(),
            workout_result: Vec::new(),
            exercise_result: Vec::new(),
            measurement_result: Vec::new(),
        }
    }

    /// Backup holding `records(ty)` for every record type.
    pub fn collect<'a>(
        backup_timestamp: i64,
        mut records: impl FnMut(RecordType) -> &'a [Record],
    ) -> Self {
        let mut backup = Self::new(backup_timestamp);
        for ty in RecordType::ALL.iter().copied() {
            *backup.table_mut(ty) = records(ty).to_vec();
        }

        backup
    }

    #[must_use]
    pub fn table(&self, record_type: RecordType) -> &[Record] {
        match record_type {
            RecordType::Log => &self.log,
            RecordType::Setting => &self.setting,
            RecordType::Workout => &self.workout,
            RecordType::Exercise => &self.exercise,
            RecordType::Measurement => &self.measurement,
            RecordType::WorkoutResult => &self.workout_result,
            RecordType::ExerciseResult => &self.exercise_result,
            RecordType::MeasurementResult => &self.measurement_result,
        }
    }

    pub fn table_mut(&mut self, record_type: RecordType) -> &mut Vec<Record> {
        match record_type {
            RecordType::Log => &mut self.log,
            RecordType::Setting => &mut self.setting,
            RecordType::Workout => &mut self.workout,
            RecordType::Exercise => &mut self.exercise,
            RecordType::Measurement => &mut self.measurement,
            RecordType::WorkoutResult => &mut self.workout_result,
            RecordType::ExerciseResult => &mut self.exercise_result,
            RecordType::MeasurementResult => &mut self.measurement_result,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        RecordType::ALL.iter().map(|ty| self.table(*ty).len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn from_json(text: &str) -> Result<Self, BackupError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String, BackupError> {
        Ok(serde_json::to_string(self)?)
    }
}

///
/// RejectedRecord
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RejectedRecord {
    pub record_type: RecordType,
    /// Position inside the backup's table for this type.
    pub index: usize,
    pub errors: ValidationErrors,
}

///
/// RestoreReport
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RestoreReport {
    pub imported: Vec<(RecordType, usize)>,
    pub rejected: Vec<RejectedRecord>,
}

impl RestoreReport {
    #[must_use]
    pub fn imported(&self, record_type: RecordType) -> usize {
        self.imported
            .iter()
            .filter(|(ty, _)| *ty == record_type)
            .map(|(_, n)| n)
            .sum()
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

///
/// Restored
/// Ids imported so far during one restore, by type.
///

#[derive(Debug, Default)]
struct Restored(HashMap<RecordType, HashSet<String>>);

impl Restored {
    fn add(&mut self, record_type: RecordType, ids: Vec<String>) {
        self.0.entry(record_type).or_default().extend(ids);
    }
}

impl RecordLookup for Restored {
    fn contains(&self, record_type: RecordType, id: &str) -> bool {
        self.0.get(&record_type).is_some_and(|ids| ids.contains(id))
    }
}

/// Record types in restore order: internal, then parent, then child.
#[must_use]
pub fn restore_order(registry: &Registry) -> Vec<RecordType> {
    [Group::Internal, Group::Parent, Group::Child]
        .into_iter()
        .flat_map(|group| {
            registry
                .schemas()
                .iter()
                .filter(move |s| s.group == group)
                .map(|s| s.record_type)
        })
        .collect()
}

/// Restore a backup into `importer`.
///
/// Each type's valid records are imported as one batch. A child record is
/// rejected unless its parent was restored from the same backup. A store
/// failure stops the restore; batches imported before it stay imported.
pub fn restore(
    registry: &Registry,
    importer: &mut dyn RecordImporter,
    backup: BackupData,
) -> Result<RestoreReport, BackupError> {
    if backup.app_name != APP_NAME {
        return Err(BackupError::ForeignApp {
            found: backup.app_name,
        });
    }

    let mut report = RestoreReport::default();
    let mut restored = Restored::default();
    for record_type in restore_order(registry) {
        let mut batch = Vec::new();
        for (index, record) in backup.table(record_type).iter().enumerate() {
            let checked = registry.validate(record_type, record).and_then(|valid| {
                registry
                    .check_parent_link(record_type, &valid, &restored)
                    .map(|()| valid)
            });

            match checked {
                Ok(valid) => batch.push(valid),
                Err(errors) => report.rejected.push(RejectedRecord {
                    record_type,
                    index,
                    errors,
                }),
            }
        }

        let ids = batch
            .iter()
            .filter_map(|r| r.id().map(str::to_string))
            .collect();
        let count = store::import_batch(registry, importer, record_type, batch)?;
        restored.add(record_type, ids);
        report.imported.push((record_type, count));
    }

    Ok(report)
}

///
/// TESTS
///
