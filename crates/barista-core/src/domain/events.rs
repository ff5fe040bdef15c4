//! Events emitted by the scheduler as it changes state.

use serde::{Deserialize, Serialize};

use super::TaskId;

/// Why an order was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    UnknownItem,
    Full,
}

impl RejectReason {
    pub fn as_str(self) -> &'static str {
        match self {
            RejectReason::UnknownItem => "unknown_item",
            RejectReason::Full => "full",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// A queue was registered at the end of the rotation.
    Create { queue: String, capacity: usize },

    Enqueue {
        queue: String,
        task: TaskId,
        remaining: u32,
    },

    Reject {
        queue: String,
        task: TaskId,
        reason: RejectReason,
    },

    /// A skip was requested for the queue's next service.
    Mark { queue: String },

    /// A pending skip was consumed instead of serving the queue.
    Skip { queue: String },

    /// The front order got a quantum of work and went back to the tail.
    Work {
        queue: String,
        task: TaskId,
        remaining: u32,
    },

    Finish { queue: String, task: TaskId },
}

impl Event {
    /// Name used in the `event=` field of the session log.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::Create { .. } => "create",
            Event::Enqueue { .. } => "enqueue",
            Event::Reject { .. } => "reject",
            Event::Mark { .. } => "mark",
            Event::Skip { .. } => "skip",
            Event::Work { .. } => "work",
            Event::Finish { .. } => "finish",
        }
    }

    pub fn queue(&self) -> &str {
        match self {
            Event::Create { queue, .. }
            | Event::Enqueue { queue, .. }
            | Event::Reject { queue, .. }
            | Event::Mark { queue }
            | Event::Skip { queue }
            | Event::Work { queue, .. }
            | Event::Finish { queue, .. } => queue,
        }
    }
}

/// An event stamped with the simulated clock at the moment it happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub time: u64,
    #[serde(flatten)]
    pub event: Event,
}

impl EventRecord {
    pub fn new(time: u64, event: Event) -> Self {
        Self { time, event }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_flat_with_event_tag() {
        let record = EventRecord::new(
            4,
            Event::Work {
                queue: "A".into(),
                task: TaskId::new("A", 2),
                remaining: 1,
            },
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "time": 4,
                "event": "work",
                "queue": "A",
                "task": "A-002",
                "remaining": 1,
            })
        );
    }

    #[test]
    fn reject_reason_matches_serialized_form() {
        let json = serde_json::to_value(RejectReason::UnknownItem).unwrap();
        assert_eq!(json, RejectReason::UnknownItem.as_str());
    }

    #[test]
    fn kind_and_queue_accessors() {
        let event = Event::Skip { queue: "B".into() };
        assert_eq!(event.kind(), "skip");
        assert_eq!(event.queue(), "B");
    }
}
