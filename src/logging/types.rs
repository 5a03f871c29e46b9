//! Step bookkeeping for best-effort stages.

/// Outcome of a best-effort step whose failure never aborts the command.
#[derive(Debug, Clone)]
pub struct StepEntry {
    /// Human-readable step name (e.g. `"git init"`).
    pub name: String,
    /// Final status of the step.
    pub status: StepStatus,
    /// Optional detail (exit code, spawn error, ...).
    pub message: Option<String>,
}

/// Status of a completed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// Step ran and succeeded.
    Ok,
    /// Step was not needed (e.g. nothing to remove).
    Skipped,
    /// Step failed; the failure was absorbed.
    Ignored,
}
