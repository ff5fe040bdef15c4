use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-queue order id, e.g. `A-001`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(String);

impl TaskId {
    /// Build the id of the `seq`-th order placed in `queue` (1-indexed).
    pub fn new(queue: &str, seq: u64) -> Self {
        Self(format!("{queue}-{seq:03}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One customer order waiting in a queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    label: String,
    work: u32,
    remaining: u32,
}

impl Task {
    pub fn new(id: TaskId, label: impl Into<String>, work: u32) -> Self {
        Self {
            id,
            label: label.into(),
            work,
            remaining: work,
        }
    }

    pub fn id(&self) -> &TaskId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Work assigned when the order was placed.
    pub fn work(&self) -> u32 {
        self.work
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_done(&self) -> bool {
        self.remaining == 0
    }

    /// Perform up to `quantum` units of work and return how much was done.
    pub fn serve(&mut self, quantum: u32) -> u32 {
        let worked = self.remaining.min(quantum);
        self.remaining -= worked;
        worked
    }
}
