//! Round-robin scheduler.
//!
//! One worker serves every registered queue in creation order. A turn visits
//! each non-empty queue once and gives its front order one quantum of work;
//! an order that still needs work goes back to the tail of its own queue.

use std::collections::HashMap;

use super::{Completion, QueueStatus, SchedulerStatus, TaskView};
use crate::config::CafeConfig;
use crate::domain::{Event, EventRecord, Menu, RejectReason, Task, TaskId};
use crate::error::CafeError;
use crate::ports::{EventSink, LogSink};
use crate::queue::BoundedQueue;

/// A named waiting line and its per-queue bookkeeping.
#[derive(Debug)]
struct Line {
    name: String,
    tasks: BoundedQueue<Task>,
    next_seq: u64,
    skip_pending: bool,
}

impl Line {
    fn new(name: &str, tasks: BoundedQueue<Task>) -> Self {
        Self {
            name: name.to_string(),
            tasks,
            next_seq: 1,
            skip_pending: false,
        }
    }

    fn allocate_id(&mut self) -> TaskId {
        let id = TaskId::new(&self.name, self.next_seq);
        self.next_seq += 1;
        id
    }

    /// One visit of this line during turn `turn`.
    ///
    /// Empty lines are left untouched, including any pending skip.
    fn visit(
        &mut self,
        turn: u64,
        quantum: u32,
        clock: &mut u64,
        sink: &mut impl EventSink,
    ) -> Result<Option<Completion>, CafeError> {
        if self.tasks.is_empty() {
            return Ok(None);
        }

        if self.skip_pending {
            self.skip_pending = false;
            sink.emit(EventRecord::new(
                *clock,
                Event::Skip {
                    queue: self.name.clone(),
                },
            ));
            return Ok(None);
        }

        let mut task = self.tasks.dequeue_front()?;
        *clock += u64::from(task.serve(quantum));

        if task.is_done() {
            sink.emit(EventRecord::new(
                *clock,
                Event::Finish {
                    queue: self.name.clone(),
                    task: task.id().clone(),
                },
            ));
            return Ok(Some(Completion {
                queue: self.name.clone(),
                task: task.id().clone(),
                label: task.label().to_string(),
                turn,
                finished_at: *clock,
            }));
        }

        sink.emit(EventRecord::new(
            *clock,
            Event::Work {
                queue: self.name.clone(),
                task: task.id().clone(),
                remaining: task.remaining(),
            },
        ));
        // The slot freed by the dequeue above is always available.
        self.tasks.enqueue(task)?;
        Ok(None)
    }

    fn status(&self) -> QueueStatus {
        QueueStatus {
            name: self.name.clone(),
            len: self.tasks.len(),
            capacity: self.tasks.capacity(),
            skip_pending: self.skip_pending,
            tasks: self
                .tasks
                .iter()
                .map(|task| TaskView {
                    id: task.id().clone(),
                    label: task.label().to_string(),
                    remaining: task.remaining(),
                })
                .collect(),
        }
    }
}

/// Round-robin scheduler over named bounded queues.
///
/// Design:
/// - `lines` keeps creation order, which is also the rotation order.
/// - `index` maps a queue name to its position in `lines`.
/// - Every state change is reported to the sink `S`.
pub struct Scheduler<S = LogSink> {
    lines: Vec<Line>,
    index: HashMap<String, usize>,
    menu: Menu,

    /// Simulated minutes of work performed so far.
    clock: u64,

    /// Turns executed across all `run` calls.
    turn_counter: u64,

    sink: S,
}

impl Scheduler<LogSink> {
    pub fn new(menu: Menu) -> Self {
        Self::with_sink(menu, LogSink)
    }
}

impl Default for Scheduler<LogSink> {
    fn default() -> Self {
        Self::new(Menu::default())
    }
}

impl<S: EventSink> Scheduler<S> {
    pub fn with_sink(menu: Menu, sink: S) -> Self {
        Self {
            lines: Vec::new(),
            index: HashMap::new(),
            menu,
            clock: 0,
            turn_counter: 0,
            sink,
        }
    }

    pub fn from_config(config: &CafeConfig, sink: S) -> Self {
        Self::with_sink(config.menu.clone(), sink)
    }

    /// Register a queue at the end of the rotation.
    pub fn create_queue(&mut self, name: &str, capacity: i64) -> Result<(), CafeError> {
        if self.index.contains_key(name) {
            return Err(CafeError::DuplicateName(name.to_string()));
        }
        let tasks = BoundedQueue::new(capacity)?;
        let capacity = tasks.capacity();

        self.index.insert(name.to_string(), self.lines.len());
        self.lines.push(Line::new(name, tasks));
        self.emit(Event::Create {
            queue: name.to_string(),
            capacity,
        });
        Ok(())
    }

    /// Place an order for `label` at the tail of queue `name`.
    ///
    /// An id is allocated as soon as the queue is found, so refused orders
    /// still consume one.
    pub fn enqueue_task(&mut self, name: &str, label: &str) -> Result<TaskId, CafeError> {
        let slot = self.line_index(name)?;
        let line = &mut self.lines[slot];
        let id = line.allocate_id();

        let placed = self.menu.work_for(label).and_then(|work| {
            line.tasks
                .enqueue(Task::new(id.clone(), label, work))
                .map(|()| work)
        });

        match placed {
            Ok(work) => {
                self.emit(Event::Enqueue {
                    queue: name.to_string(),
                    task: id.clone(),
                    remaining: work,
                });
                Ok(id)
            }
            Err(err) => {
                let reason = match err {
                    CafeError::UnknownItem(_) => RejectReason::UnknownItem,
                    _ => RejectReason::Full,
                };
                log::warn!("rejected order {id} for queue {name}: {err}");
                self.emit(Event::Reject {
                    queue: name.to_string(),
                    task: id,
                    reason,
                });
                Err(err)
            }
        }
    }

    /// Skip the next service of queue `name`.
    ///
    /// The skip is consumed by the first visit during `run` that finds the
    /// queue non-empty.
    pub fn skip(&mut self, name: &str) -> Result<(), CafeError> {
        let slot = self.line_index(name)?;
        self.lines[slot].skip_pending = true;
        self.emit(Event::Mark {
            queue: name.to_string(),
        });
        Ok(())
    }

    /// Run up to `turns` round-robin turns with `quantum` units of work per
    /// visit and return the orders that finished, in finishing order.
    ///
    /// Stops early once every queue is empty; turns that are not executed are
    /// not counted.
    pub fn run(&mut self, turns: i64, quantum: i64) -> Result<Vec<Completion>, CafeError> {
        let turns = u64::try_from(turns)
            .ok()
            .filter(|&n| n > 0)
            .ok_or(CafeError::InvalidTurns(turns))?;
        if quantum <= 0 {
            return Err(CafeError::InvalidQuantum(quantum));
        }
        let quantum = u32::try_from(quantum).unwrap_or(u32::MAX);

        let mut completions = Vec::new();
        let mut executed = 0;
        for turn in 1..=turns {
            if self.is_idle() {
                break;
            }
            for line in &mut self.lines {
                if let Some(done) = line.visit(turn, quantum, &mut self.clock, &mut self.sink)? {
                    completions.push(done);
                }
            }
            self.turn_counter += 1;
            executed += 1;
        }

        log::info!(
            "run: turns={executed}/{turns} quantum={quantum} completed={} time={}",
            completions.len(),
            self.clock
        );
        Ok(completions)
    }

    pub fn status(&self) -> SchedulerStatus {
        SchedulerStatus {
            time: self.clock,
            turns: self.turn_counter,
            menu: self.menu.clone(),
            queues: self.lines.iter().map(Line::status).collect(),
        }
    }

    /// True when no queue holds an order.
    pub fn is_idle(&self) -> bool {
        self.lines.iter().all(|line| line.tasks.is_empty())
    }

    pub fn queue(&self, name: &str) -> Option<&BoundedQueue<Task>> {
        self.index.get(name).map(|&slot| &self.lines[slot].tasks)
    }

    /// Queue names in rotation order.
    pub fn queue_names(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|line| line.name.as_str())
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn clock(&self) -> u64 {
        self.clock
    }

    pub fn turn_counter(&self) -> u64 {
        self.turn_counter
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    fn line_index(&self, name: &str) -> Result<usize, CafeError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| CafeError::UnknownQueue(name.to_string()))
    }

    fn emit(&mut self, event: Event) {
        self.sink.emit(EventRecord::new(self.clock, event));
    }
}
