//! Domain model (orders, ids, menu, events).

pub mod events;
pub mod menu;
pub mod task;

pub use events::{Event, EventRecord, RejectReason};
pub use menu::Menu;
pub use task::{Task, TaskId};
