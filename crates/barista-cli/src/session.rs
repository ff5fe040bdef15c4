//! Interactive session: feeds parsed commands to one scheduler and collects
//! the lines to print.

use barista_core::{CafeConfig, CafeError, Journal, Scheduler};

use crate::command::{self, Command};
use crate::render;

pub const FAREWELL: &str = "Break time!";

/// What the input loop should do after a line.
#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    Print(Vec<String>),
    Quit,
}

pub struct Session {
    scheduler: Scheduler<Journal>,
    display_after_run: bool,
}

impl Session {
    pub fn new(config: &CafeConfig) -> Self {
        Self {
            scheduler: Scheduler::from_config(config, Journal::new()),
            display_after_run: config.display_after_run,
        }
    }

    pub fn scheduler(&self) -> &Scheduler<Journal> {
        &self.scheduler
    }

    /// Handle one input line. A blank line ends the session.
    pub fn handle_line(&mut self, line: &str) -> Step {
        if line.trim().is_empty() {
            return Step::Quit;
        }
        match command::parse(line) {
            Ok(Some(cmd)) => Step::Print(self.execute(cmd)),
            Ok(None) => Step::Print(Vec::new()),
            Err(err) => {
                log::debug!("parse error: {err}");
                Step::Print(vec![render::error_line(
                    self.scheduler.clock(),
                    None,
                    err.reason(),
                )])
            }
        }
    }

    fn execute(&mut self, cmd: Command) -> Vec<String> {
        let mut out = Vec::new();
        let result = match &cmd {
            Command::Create { name, capacity } => self.scheduler.create_queue(name, *capacity),
            Command::Enq { name, label } => self.scheduler.enqueue_task(name, label).map(|_| ()),
            Command::Skip { name } => self.scheduler.skip(name),
            Command::Run { turns, quantum } => {
                self.scheduler.run(*turns, *quantum).map(|done| {
                    out.extend(self.events());
                    out.extend(done.iter().map(render::completion_line));
                    if self.display_after_run {
                        out.extend(render::display_lines(&self.scheduler.status()));
                    }
                })
            }
            Command::Display { json: false } => {
                out.extend(render::display_lines(&self.scheduler.status()));
                Ok(())
            }
            Command::Display { json: true } => {
                match serde_json::to_string_pretty(&self.scheduler.status()) {
                    Ok(text) => out.push(text),
                    Err(err) => log::error!("failed to serialize status: {err}"),
                }
                Ok(())
            }
            Command::Menu => {
                out.push(render::menu_line(self.scheduler.menu()));
                Ok(())
            }
        };

        match result {
            Ok(()) => out.extend(self.events()),
            Err(err) => {
                if let Some(apology) = apology(&err) {
                    out.push(apology.to_string());
                }
                out.extend(self.events());
                if !matches!(err, CafeError::UnknownItem(_) | CafeError::QueueFull { .. }) {
                    out.push(render::error_line(
                        self.scheduler.clock(),
                        queue_of(&cmd),
                        err.reason(),
                    ));
                }
            }
        }
        out
    }

    fn events(&mut self) -> Vec<String> {
        self.scheduler
            .sink_mut()
            .drain()
            .iter()
            .map(render::event_line)
            .collect()
    }
}

/// Customer-facing message for a refused order.
fn apology(err: &CafeError) -> Option<&'static str> {
    match err {
        CafeError::UnknownItem(_) => Some("Sorry, we don't serve that."),
        CafeError::QueueFull { .. } => Some("Sorry, we're at capacity."),
        _ => None,
    }
}

fn queue_of(cmd: &Command) -> Option<&str> {
    match cmd {
        Command::Create { name, .. } | Command::Enq { name, .. } | Command::Skip { name } => {
            Some(name.as_str())
        }
        _ => None,
    }
}
