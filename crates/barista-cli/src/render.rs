//! Text rendering of events, completions and status for the session log.

use barista_core::{Completion, Event, EventRecord, Menu, SchedulerStatus};

/// `time=T event=E queue=Q ...` line for one event.
pub fn event_line(record: &EventRecord) -> String {
    let mut line = format!(
        "time={} event={} queue={}",
        record.time,
        record.event.kind(),
        record.event.queue()
    );
    match &record.event {
        Event::Create { capacity, .. } => line.push_str(&format!(" capacity={capacity}")),
        Event::Enqueue {
            task, remaining, ..
        }
        | Event::Work {
            task, remaining, ..
        } => line.push_str(&format!(" task={task} remaining={remaining}")),
        Event::Reject { task, reason, .. } => {
            line.push_str(&format!(" task={task} reason={}", reason.as_str()))
        }
        Event::Finish { task, .. } => line.push_str(&format!(" task={task}")),
        Event::Mark { .. } | Event::Skip { .. } => {}
    }
    line
}

pub fn error_line(time: u64, queue: Option<&str>, reason: &str) -> String {
    match queue {
        Some(queue) => format!("time={time} event=error queue={queue} reason={reason}"),
        None => format!("time={time} event=error reason={reason}"),
    }
}

pub fn completion_line(done: &Completion) -> String {
    format!(
        "served queue={} task={} item={} turn={} time={}",
        done.queue, done.task, done.label, done.turn, done.finished_at
    )
}

pub fn menu_line(menu: &Menu) -> String {
    let items: Vec<String> = menu
        .items()
        .map(|(name, work)| format!("{name}:{work}"))
        .collect();
    match menu.fallback() {
        Some(work) => format!("menu=[{}] fallback={work}", items.join(",")),
        None => format!("menu=[{}]", items.join(",")),
    }
}

/// Display block: header, menu, then one line per queue in rotation order.
pub fn display_lines(status: &SchedulerStatus) -> Vec<String> {
    let mut lines = vec![
        format!("display time={} turns={}", status.time, status.turns),
        format!("display {}", menu_line(&status.menu)),
    ];
    for queue in &status.queues {
        let tasks: Vec<String> = queue
            .tasks
            .iter()
            .map(|t| format!("{}:{}", t.id, t.remaining))
            .collect();
        let skip = if queue.skip_pending { " [skip]" } else { "" };
        lines.push(format!(
            "display {} [{}/{}]{} -> [{}]",
            queue.name,
            queue.len,
            queue.capacity,
            skip,
            tasks.join(",")
        ));
    }
    lines
}
