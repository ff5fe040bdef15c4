//! Scheduler module: round-robin service over named queues.

mod completion;
mod round_robin;
mod status;

pub use completion::Completion;
pub use round_robin::Scheduler;
pub use status::{QueueStatus, SchedulerStatus, TaskView};
