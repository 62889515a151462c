use waterline_metrics::MetricSink;

use crate::model::Workflow;
use crate::reporter::WorkflowMetricsReporter;

/// A hook into workflow lifecycle events.
///
/// The workflow engine drives these callbacks; implementations must never let
/// their own failures disturb workflow execution. All callbacks default to
/// no-ops so implementations only override the events they care about.
pub trait WorkflowStatusListener {
    /// Called when a workflow completes.
    fn on_workflow_completed(&self, workflow: &Workflow) {
        let _ = workflow;
    }

    /// Called when a workflow is terminated.
    fn on_workflow_terminated(&self, workflow: &Workflow) {
        let _ = workflow;
    }

    /// Called when a workflow is finalized, after it has reached a terminal
    /// state and the engine has finished all bookkeeping for it.
    fn on_workflow_finalized(&self, workflow: &Workflow) {
        let _ = workflow;
    }
}

/// A [`WorkflowStatusListener`] that emits completion metrics.
///
/// Wires a [`WorkflowMetricsReporter`] into the finalization callback. The
/// reporter has no failure path of its own (bad bin configurations are
/// logged and skipped internally), so this listener upholds the
/// never-disturb-the-engine contract by construction.
pub struct MetricsStatusListener<S> {
    reporter: WorkflowMetricsReporter<S>,
}

impl<S: MetricSink> MetricsStatusListener<S> {
    /// Creates a `MetricsStatusListener` that emits through the given sink.
    pub fn new(sink: S) -> Self {
        Self {
            reporter: WorkflowMetricsReporter::new(sink),
        }
    }
}

impl<S: MetricSink> WorkflowStatusListener for MetricsStatusListener<S> {
    fn on_workflow_finalized(&self, workflow: &Workflow) {
        self.reporter.record_metrics(workflow);
    }
}
