//! Domain-specific error types for the axype CLI.
//!
//! Library modules return [`AxypeError`] for every failure the user is
//! expected to see (missing tools, collisions, publish rejections, …).
//! Command handlers at the CLI boundary convert them to [`anyhow::Error`]
//! via the standard `?` operator and `main` turns any error into exit
//! status `1`.
//!
//! Declining the init confirmation is not an error: it is reported as
//! [`InitOutcome::Cancelled`](crate::commands::init::InitOutcome) and exits `0`.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the axype CLI.
#[derive(Error, Debug)]
pub enum AxypeError {
    /// A required external tool could not be started.
    #[error("{tool} is not installed on this system! {remedy}")]
    MissingPrerequisite {
        /// Display name of the missing tool (e.g. `"Git"`).
        tool: String,
        /// Remediation text shown to the user.
        remedy: String,
    },

    /// The project name contains no characters from `[A-Za-z0-9-]`.
    #[error("project name '{0}' has no usable characters (allowed: A-Z, a-z, 0-9 and '-')")]
    InvalidProjectName(String),

    /// The init target directory already exists.
    #[error(
        "couldn't init because a file with the same target name already exists: {}",
        .0.display()
    )]
    TargetExists(PathBuf),

    /// Cloning the template repository failed.
    #[error("something went wrong while cloning the template repository {url}: {reason}")]
    CloneFailed {
        /// Repository URL that was being cloned.
        url: String,
        /// Tool output or spawn error.
        reason: String,
    },

    /// The cloned template is missing its manifest or the manifest is not a JSON object.
    #[error("invalid project template at {}: {reason}", .path.display())]
    InvalidTemplate {
        /// Manifest path that could not be used.
        path: PathBuf,
        /// Human-readable reason.
        reason: String,
    },

    /// The publish source file does not exist.
    #[error("file at target path does not exist: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The publish source file exists but could not be read.
    #[error("failed to read file {}", .path.display())]
    ReadError {
        /// Path of the unreadable file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The remote service did not confirm the publish.
    #[error("failed to update source of {paste} ({})", describe_status(.status))]
    PublishRejected {
        /// Paste the publish targeted.
        paste: String,
        /// HTTP status, or `None` when no response was received.
        status: Option<u16>,
        /// Raw response body (or transport error text).
        body: String,
    },

    /// The credential file could not be read or written.
    #[error("credential file {} is not accessible", .path.display())]
    Credential {
        /// Path of the secret file or its directory.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// No configuration directory could be determined.
    #[error("cannot determine home directory; use --config-dir or set AXYPE_CONFIG_DIR")]
    NoHomeDirectory,
}

#[allow(clippy::ref_option)]
fn describe_status(status: &Option<u16>) -> String {
    status.map_or_else(|| "no response".to_string(), |code| format!("HTTP {code}"))
}
