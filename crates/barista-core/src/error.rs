use thiserror::Error;

/// Errors raised by queue and scheduler operations.
///
/// All of them are recoverable: the caller reports the error and keeps the
/// scheduler in use.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CafeError {
    #[error("invalid capacity {0}: capacity must be positive")]
    InvalidCapacity(i64),

    #[error("queue {0} already exists")]
    DuplicateName(String),

    #[error("unknown queue {0}")]
    UnknownQueue(String),

    #[error("queue is full (capacity={capacity})")]
    QueueFull { capacity: usize },

    #[error("queue is empty")]
    QueueEmpty,

    #[error("invalid turns {0}: turns must be positive")]
    InvalidTurns(i64),

    #[error("invalid quantum {0}: quantum must be positive")]
    InvalidQuantum(i64),

    #[error("item {0} is not on the menu")]
    UnknownItem(String),
}

impl CafeError {
    /// Short machine-friendly reason, used in `reason=` fields of the event log.
    pub fn reason(&self) -> &'static str {
        match self {
            CafeError::InvalidCapacity(_) => "invalid_capacity",
            CafeError::DuplicateName(_) => "duplicate_name",
            CafeError::UnknownQueue(_) => "unknown_queue",
            CafeError::QueueFull { .. } => "full",
            CafeError::QueueEmpty => "empty",
            CafeError::InvalidTurns(_) => "invalid_turns",
            CafeError::InvalidQuantum(_) => "invalid_quantum",
            CafeError::UnknownItem(_) => "unknown_item",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            CafeError::DuplicateName("A".into()).to_string(),
            "queue A already exists"
        );
        assert!(CafeError::InvalidTurns(0).to_string().contains('0'));
        assert_eq!(
            CafeError::QueueFull { capacity: 2 }.to_string(),
            "queue is full (capacity=2)"
        );
    }

    #[test]
    fn reasons_are_snake_case() {
        assert_eq!(CafeError::QueueFull { capacity: 1 }.reason(), "full");
        assert_eq!(CafeError::UnknownItem("x".into()).reason(), "unknown_item");
    }
}
