//! Logging infrastructure for structured console output.

mod logger;
mod subscriber;
mod types;

pub use logger::Logger;
pub use subscriber::init_subscriber;
pub use types::{StepEntry, StepStatus};

/// Target used for stage headers ("Cloning template repository...").
pub(crate) const STAGE_TARGET: &str = "axype::stage";

/// Target used for completed-action confirmations.
pub(crate) const SUCCESS_TARGET: &str = "axype::success";
