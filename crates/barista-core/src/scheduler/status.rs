//! Status - point-in-time view of the scheduler for display.

use serde::{Deserialize, Serialize};

use crate::domain::{Menu, TaskId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerStatus {
    pub time: u64,
    pub turns: u64,
    pub menu: Menu,

    /// Queues in rotation order.
    pub queues: Vec<QueueStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueStatus {
    pub name: String,
    pub len: usize,
    pub capacity: usize,
    pub skip_pending: bool,

    /// Orders front to back.
    pub tasks: Vec<TaskView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskView {
    pub id: TaskId,
    pub label: String,
    pub remaining: u32,
}

impl SchedulerStatus {
    pub fn queue(&self, name: &str) -> Option<&QueueStatus> {
        self.queues.iter().find(|q| q.name == name)
    }

    /// Total work still owed across every queue.
    pub fn outstanding_work(&self) -> u64 {
        self.queues
            .iter()
            .flat_map(|q| &q.tasks)
            .map(|t| u64::from(t.remaining))
            .sum()
    }
}
