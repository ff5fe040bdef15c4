//! EventSink port - recording scheduler events.

use crate::domain::EventRecord;

/// EventSink receives every event the scheduler emits, in order.
pub trait EventSink {
    fn emit(&mut self, record: EventRecord);
}

/// Forwards events to the `log` facade at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl EventSink for LogSink {
    fn emit(&mut self, record: EventRecord) {
        log::debug!(
            "time={} event={} queue={}",
            record.time,
            record.event.kind(),
            record.event.queue()
        );
    }
}

/// Buffers events until the caller drains them.
///
/// The CLI drains the journal after each command to print that command's
/// events.
#[derive(Debug, Default, Clone)]
pub struct Journal {
    records: Vec<EventRecord>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every buffered record, oldest first.
    pub fn drain(&mut self) -> Vec<EventRecord> {
        std::mem::take(&mut self.records)
    }

    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl EventSink for Journal {
    fn emit(&mut self, record: EventRecord) {
        log::trace!("journal: {:?}", record);
        self.records.push(record);
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, record: EventRecord) {
        (**self).emit(record);
    }
}
