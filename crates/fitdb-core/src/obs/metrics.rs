use crate::{
    obs::sink::{MetricsEvent, MetricsSink},
    types::RecordType,
};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

const TYPE_COUNT: usize = RecordType::ALL.len();

///
/// TypeCounters
///

#[derive(Debug, Default)]
struct TypeCounters {
    validated: AtomicU64,
    rejected: AtomicU64,
    field_errors: AtomicU64,
    imported: AtomicU64,
    import_failures: AtomicU64,
}

impl TypeCounters {
    fn snapshot(&self, record_type: RecordType) -> TypeMetrics {
        TypeMetrics {
            record_type,
            validated: self.validated.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
            field_errors: self.field_errors.load(Ordering::Relaxed),
            imported: self.imported.load(Ordering::Relaxed),
            import_failures: self.import_failures.load(Ordering::Relaxed),
        }
    }

    fn reset(&self) {
        for counter in [
            &self.validated,
            &self.rejected,
            &self.field_errors,
            &self.imported,
            &self.import_failures,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }
}

///
/// CountingSink
///
/// Per-type atomic counters; safe to share between concurrent validations.
///

#[derive(Debug)]
pub struct CountingSink {
    counters: [TypeCounters; TYPE_COUNT],
}

impl CountingSink {
    #[must_use]
    pub fn new() -> Self {
        Self {
            counters: std::array::from_fn(|_| TypeCounters::default()),
        }
    }

    /// Point-in-time copy of every counter.
    #[must_use]
    pub fn snapshot(&self) -> MetricsSnapshot {
        let types = RecordType::ALL
            .iter()
            .map(|ty| self.counters[ty.index()].snapshot(*ty))
            .collect();

        MetricsSnapshot { types }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        for counters in &self.counters {
            counters.reset();
        }
    }
}

impl Default for CountingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsSink for CountingSink {
    fn record(&self, event: MetricsEvent) {
        let counters = &self.counters[event.record_type().index()];

        match event {
            MetricsEvent::RecordValidated { .. } => {
                counters.validated.fetch_add(1, Ordering::Relaxed);
            }
            MetricsEvent::RecordRejected { field_errors, .. } => {
                counters.rejected.fetch_add(1, Ordering::Relaxed);
                counters.field_errors.fetch_add(field_errors, Ordering::Relaxed);
            }
            MetricsEvent::RecordsImported { count, .. } => {
                counters.imported.fetch_add(count, Ordering::Relaxed);
            }
            MetricsEvent::ImportFailed { .. } => {
                counters.import_failures.fetch_add(1, Ordering::Relaxed);
            }
        }
    }
}

///
/// TypeMetrics
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeMetrics {
    pub record_type: RecordType,
    pub validated: u64,
    pub rejected: u64,
    pub field_errors: u64,
    pub imported: u64,
    pub import_failures: u64,
}

///
/// MetricsSnapshot
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub types: Vec<TypeMetrics>,
}

impl MetricsSnapshot {
    #[must_use]
    pub fn get(&self, record_type: RecordType) -> Option<&TypeMetrics> {
        self.types.iter().find(|m| m.record_type == record_type)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_per_type() {
        let sink = CountingSink::new();
        sink.record(MetricsEvent::RecordValidated {
            record_type: RecordType::Exercise,
        });
        sink.record(MetricsEvent::RecordRejected {
            record_type: RecordType::Exercise,
            field_errors: 3,
        });
        sink.record(MetricsEvent::RecordsImported {
            record_type: RecordType::Workout,
            count: 2,
        });

        let snapshot = sink.snapshot();
        let exercise = snapshot.get(RecordType::Exercise).unwrap();
        assert_eq!(exercise.validated, 1);
        assert_eq!(exercise.rejected, 1);
        assert_eq!(exercise.field_errors, 3);
        assert_eq!(snapshot.get(RecordType::Workout).unwrap().imported, 2);
        assert_eq!(snapshot.types.len(), RecordType::ALL.len());
    }

    #[test]
    fn reset_zeroes_everything() {
        let sink = CountingSink::new();
        sink.record(MetricsEvent::ImportFailed {
            record_type: RecordType::Log,
        });
        sink.reset();

        assert_eq!(sink.snapshot().get(RecordType::Log).unwrap().import_failures, 0);
    }

    #[test]
    fn snapshot_serializes_type_slugs() {
        let sink = CountingSink::new();
        let json = serde_json::to_value(sink.snapshot()).unwrap();

        assert_eq!(json["types"][5]["recordType"], "workout-result");
    }
}
