use serde::{Deserialize, Serialize};

use crate::domain::TaskId;

/// An order that finished during `Scheduler::run`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub queue: String,
    pub task: TaskId,
    pub label: String,

    /// Turn of the `run` call in which the order finished (1-indexed).
    pub turn: u64,

    /// Simulated clock right after the final quantum.
    pub finished_at: u64,
}
