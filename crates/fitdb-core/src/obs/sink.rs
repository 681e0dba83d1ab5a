//! Metrics sink boundary.
//!
//! All instrumentation flows through MetricsEvent and MetricsSink.
//! Sinks are shared across threads, so recording takes `&self`.
use crate::types::RecordType;

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetricsEvent {
    RecordValidated {
        record_type: RecordType,
    },
    RecordRejected {
        record_type: RecordType,
        field_errors: u64,
    },
    RecordsImported {
        record_type: RecordType,
        count: u64,
    },
    ImportFailed {
        record_type: RecordType,
    },
}

impl MetricsEvent {
    #[must_use]
    pub const fn record_type(&self) -> RecordType {
        match *self {
            Self::RecordValidated { record_type }
            | Self::RecordRejected { record_type, .. }
            | Self::RecordsImported { record_type, .. }
            | Self::ImportFailed { record_type } => record_type,
        }
    }
}

///
/// MetricsSink
///

pub trait MetricsSink: Send + Sync {
    fn record(&self, event: MetricsEvent);
}

///
/// NoopSink
/// Default sink; drops every event.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl MetricsSink for NoopSink {
    fn record(&self, _: MetricsEvent) {}
}
