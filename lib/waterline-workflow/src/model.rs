//! Workflow engine payload model.
//!
//! A deliberately small view of the engine's finalization payload: just the
//! fields the metrics reporter reads. Payloads arrive as JSON from the host,
//! so everything here is serde-deserializable, and unknown fields are
//! ignored.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Terminal and non-terminal states of a workflow execution.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkflowStatus {
    /// The workflow is still executing.
    Running,

    /// The workflow is paused, awaiting a resume.
    Paused,

    /// The workflow ran to completion.
    Completed,

    /// The workflow failed.
    Failed,

    /// The workflow exceeded its allowed execution time.
    TimedOut,

    /// The workflow was terminated externally.
    Terminated,
}

impl WorkflowStatus {
    /// Returns `true` if the workflow finished successfully.
    pub fn is_successful(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// States of a single task execution within a workflow.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// The task has been scheduled but not picked up yet.
    Scheduled,

    /// The task is currently executing.
    InProgress,

    /// The task finished successfully.
    Completed,

    /// The task finished with non-fatal errors.
    CompletedWithErrors,

    /// The task failed.
    Failed,

    /// The task exceeded its allowed execution time.
    TimedOut,

    /// The task was canceled before completing.
    Canceled,

    /// The task was skipped.
    Skipped,
}

impl TaskStatus {
    /// Returns `true` if the task finished successfully, including
    /// completion with non-fatal errors.
    pub fn is_successful(&self) -> bool {
        matches!(self, Self::Completed | Self::CompletedWithErrors)
    }
}

/// A single task execution within a finalized workflow.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Name of the task definition this execution ran.
    pub task_def_name: String,

    /// Status of the task execution.
    pub status: TaskStatus,

    /// Time the task finished, in milliseconds since the epoch. Zero when
    /// the task never reached a terminal state.
    #[serde(default)]
    pub end_time: i64,
}

/// A finalized workflow execution.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    /// Name of the workflow definition this execution ran.
    pub workflow_name: String,

    /// Status of the workflow execution.
    pub status: WorkflowStatus,

    /// Time the workflow started, in milliseconds since the epoch.
    #[serde(default)]
    pub start_time: i64,

    /// Time the workflow finished, in milliseconds since the epoch.
    #[serde(default)]
    pub end_time: i64,

    /// Free-form input the workflow was started with.
    ///
    /// Carries, among anything else the caller supplied, the optional
    /// latency bin configuration keys.
    #[serde(default)]
    pub input: Map<String, Value>,

    /// Task executions that ran within this workflow.
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Workflow {
    /// Returns the total execution time of the workflow, in milliseconds.
    pub fn execution_time_ms(&self) -> i64 {
        self.end_time - self.start_time
    }
}
