use serde_json::{Map, Value};
use tracing::warn;
use waterline_binning::{compute_bins, BinConfig};
use waterline_error::{generic_error, ErrorContext as _, GenericError};
use waterline_metrics::{into_labels, MetricSink};

use crate::model::{Task, Workflow};

const WORKFLOW_EXECUTION_ATTEMPT: &str = "workflow_execution_attempt";
const WORKFLOW_EXECUTION_SUCCESS: &str = "workflow_execution_success";
const WORKFLOW_EXECUTION_FAILURE: &str = "workflow_execution_failure";
const WORKFLOW_LATENCY_BINS: &str = "workflow_latency_bins";
const TASK_EXECUTION_ATTEMPT: &str = "task_execution_attempt";
const TASK_EXECUTION_SUCCESS: &str = "task_execution_success";
const TASK_EXECUTION_FAILURE: &str = "task_execution_failure";
const TASK_LATENCY: &str = "task_latency";

/// Workflow input keys carrying the latency bin configuration.
const LATENCY_BIN_LOW_KEY: &str = "latencySloBinLow";
const LATENCY_BIN_HIGH_KEY: &str = "latencySloBinHigh";
const LATENCY_BIN_STEP_KEY: &str = "latencySloBinStep";

/// Emits completion metrics for finalized workflows.
///
/// For every workflow: an attempt counter, then either a success counter
/// (plus latency bins, when the workflow input configures them) or a failure
/// counter. For every task within the workflow: the same attempt/success/
/// failure counters, plus task latency measured from the workflow start.
///
/// All emission goes through the injected [`MetricSink`]; the reporter owns
/// no metric storage of its own. Nothing here can fail in a way that
/// disturbs the caller: a bad bin configuration is logged and skipped, and
/// every other path is infallible.
pub struct WorkflowMetricsReporter<S> {
    sink: S,
}

impl<S: MetricSink> WorkflowMetricsReporter<S> {
    /// Creates a `WorkflowMetricsReporter` that emits through the given sink.
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Records all completion metrics for a finalized workflow.
    pub fn record_metrics(&self, workflow: &Workflow) {
        self.record_workflow_metrics(workflow);
        self.record_task_metrics(workflow);
    }

    fn record_workflow_metrics(&self, workflow: &Workflow) {
        self.workflow_counter(WORKFLOW_EXECUTION_ATTEMPT, workflow);
        if workflow.status.is_successful() {
            self.workflow_counter(WORKFLOW_EXECUTION_SUCCESS, workflow);
            self.record_latency_bins(workflow);
        } else {
            self.workflow_counter(WORKFLOW_EXECUTION_FAILURE, workflow);
        }
    }

    fn record_task_metrics(&self, workflow: &Workflow) {
        for task in &workflow.tasks {
            self.task_counter(TASK_EXECUTION_ATTEMPT, task);
            if task.status.is_successful() {
                self.task_counter(TASK_EXECUTION_SUCCESS, task);
                self.record_task_latency(workflow, task);
            } else {
                self.task_counter(TASK_EXECUTION_FAILURE, task);
            }
        }
    }

    /// Records task latency, measured from the workflow start time to the end
    /// of the task execution. Tasks without an end time are skipped.
    fn record_task_latency(&self, workflow: &Workflow, task: &Task) {
        if task.end_time > 0 {
            // Clamped: clock adjustments can land a task end ahead of the
            // workflow start, and a negative duration must not wrap.
            let latency_ms = (task.end_time - workflow.start_time).max(0) as u64;
            self.sink.record_duration(
                TASK_LATENCY,
                latency_ms,
                &into_labels([("task_name", task.task_def_name.clone())]),
            );
        }
    }

    fn record_latency_bins(&self, workflow: &Workflow) {
        match latency_bin_config(&workflow.input) {
            Ok(Some(config)) => {
                for bin in compute_bins(&config, workflow.execution_time_ms()) {
                    self.sink.record(
                        WORKFLOW_LATENCY_BINS,
                        &into_labels([
                            ("workflow_name", workflow.workflow_name.clone()),
                            ("bin", bin),
                        ]),
                    );
                }
            }
            // No configuration present; binning is opt-in per workflow.
            Ok(None) => {}
            Err(e) => warn!(
                error = %e, workflow_name = %workflow.workflow_name,
                "Invalid latency bin configuration. Skipping latency bin metrics."
            ),
        }
    }

    fn workflow_counter(&self, name: &'static str, workflow: &Workflow) {
        self.sink.record(
            name,
            &into_labels([("workflow_name", workflow.workflow_name.clone())]),
        );
    }

    fn task_counter(&self, name: &'static str, task: &Task) {
        self.sink
            .record(name, &into_labels([("task_name", task.task_def_name.clone())]));
    }
}

/// Extracts the latency bin configuration from workflow input.
///
/// All three keys must be present for binning to apply; anything less means
/// the workflow simply didn't opt in, and `None` is returned. Present but
/// malformed values, and configurations the binning core rejects, surface as
/// errors for the caller to log.
fn latency_bin_config(input: &Map<String, Value>) -> Result<Option<BinConfig>, GenericError> {
    let low = input_value(input, LATENCY_BIN_LOW_KEY)?;
    let high = input_value(input, LATENCY_BIN_HIGH_KEY)?;
    let step = input_value(input, LATENCY_BIN_STEP_KEY)?;

    match (low, high, step) {
        (Some(low), Some(high), Some(step)) => Ok(Some(BinConfig::new(low, high, step)?)),
        _ => Ok(None),
    }
}

/// Reads a single integer from workflow input.
///
/// Workflow input is free-form JSON, and callers hand us bin bounds both as
/// numbers and as numeric strings, so both forms are accepted.
fn input_value(input: &Map<String, Value>, key: &str) -> Result<Option<i64>, GenericError> {
    match input.get(key) {
        None => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| generic_error!("value for workflow input key '{}' is not a whole number", key)),
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .with_error_context(|| format!("invalid value for workflow input key '{}'", key)),
        Some(other) => Err(generic_error!(
            "value for workflow input key '{}' has unsupported type: {}",
            key,
            json_type_name(other)
        )),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
