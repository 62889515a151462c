//! Workflow completion metrics.
//!
//! The collaborator layer around the binning core: a minimal model of the
//! workflow engine's finalization payload, a [`WorkflowStatusListener`] trait
//! for hooking workflow lifecycle events, and a [`WorkflowMetricsReporter`]
//! that emits execution counters, task latency, and user-configured latency
//! bins through an injected [`MetricSink`][waterline_metrics::MetricSink].
#![deny(warnings)]
#![deny(missing_docs)]

mod listener;
mod model;
mod reporter;

pub use self::listener::{MetricsStatusListener, WorkflowStatusListener};
pub use self::model::{Task, TaskStatus, Workflow, WorkflowStatus};
pub use self::reporter::WorkflowMetricsReporter;
