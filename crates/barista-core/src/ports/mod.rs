//! Ports - where the scheduler reports what it did.

pub mod event_sink;

pub use self::event_sink::{EventSink, Journal, LogSink};
