//! Structured logger with step collection.
use std::cell::RefCell;

use super::types::{StepEntry, StepStatus};
use super::{STAGE_TARGET, SUCCESS_TARGET};

/// Console logger.
///
/// Every method emits a [`tracing`] event; rendering is done by the
/// subscriber installed with [`init_subscriber`](super::init_subscriber).
/// Without a subscriber (unit tests) events are dropped but steps are still
/// recorded.
#[derive(Debug, Default)]
pub struct Logger {
    steps: RefCell<Vec<StepEntry>>,
}

impl Logger {
    /// Create a new logger with no recorded steps.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log a stage header (something is about to happen).
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: STAGE_TARGET, "{msg}");
    }

    /// Log a completed action.
    pub fn success(&self, msg: &str) {
        tracing::info!(target: SUCCESS_TARGET, "{msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message (suppressed on console unless verbose).
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// Record the outcome of a best-effort step.
    pub fn record_step(&self, name: &str, status: StepStatus, message: Option<&str>) {
        self.steps.borrow_mut().push(StepEntry {
            name: name.to_string(),
            status,
            message: message.map(String::from),
        });
    }

    /// Return a copy of all recorded steps.
    #[must_use]
    pub fn steps(&self) -> Vec<StepEntry> {
        self.steps.borrow().clone()
    }

    /// Status of the most recent step named `name`, if any.
    #[must_use]
    pub fn step_status(&self, name: &str) -> Option<StepStatus> {
        self.steps
            .borrow()
            .iter()
            .rev()
            .find(|s| s.name == name)
            .map(|s| s.status)
    }

    /// Emit the recorded steps at debug level.
    pub fn print_summary(&self) {
        let steps = self.steps.borrow();
        if steps.is_empty() {
            return;
        }
        for step in steps.iter() {
            let icon = match step.status {
                StepStatus::Ok => "✓",
                StepStatus::Skipped => "·",
                StepStatus::Ignored => "✗",
            };
            let suffix = step
                .message
                .as_ref()
                .map_or_else(String::new, |msg| format!(" ({msg})"));
            self.debug(&format!("{icon} {}{suffix}", step.name));
        }
    }
}
