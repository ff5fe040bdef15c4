//! barista-core
//!
//! Core building blocks for the café round-robin simulator.
//!
//! - **domain**: orders, task ids, the menu (work policy) and scheduler events
//! - **queue**: fixed-capacity circular queue
//! - **scheduler**: round-robin scheduler, completion records, status snapshot
//! - **ports**: event sinks the scheduler reports to
//! - **config**: JSON configuration for a session

pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod queue;
pub mod scheduler;

pub use config::{CafeConfig, ConfigError};
pub use domain::{Event, EventRecord, Menu, RejectReason, Task, TaskId};
pub use error::CafeError;
pub use ports::{EventSink, Journal, LogSink};
pub use queue::BoundedQueue;
pub use scheduler::{Completion, QueueStatus, Scheduler, SchedulerStatus, TaskView};
