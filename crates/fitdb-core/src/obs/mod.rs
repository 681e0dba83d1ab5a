//! Observability: sink abstraction and in-memory counters.
//!
//! The core never logs. Validation and import paths report what happened as
//! [`MetricsEvent`]s to whatever sink the registry was assembled with.

pub mod metrics;
pub mod sink;

// re-exports
pub use metrics::{CountingSink, MetricsSnapshot, TypeMetrics};
pub use sink::{MetricsEvent, MetricsSink, NoopSink};
