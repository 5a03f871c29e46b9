//! Axype project tooling.
//!
//! Scaffolds Luau projects from the Axype template repositories, keeps the
//! API token in `~/.axype/secret` and publishes a built source file to a
//! remote paste.
//!
//! - **[`cli`]**: argument parsing
//! - **[`commands`]**: subcommand orchestration (`init`, `set-token`, `remove-token`, `publish`)
//! - **[`project`]**: project naming and post-clone template edits
//! - **[`credentials`]** and **[`publish`]**: the token store and the paste endpoint client
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod credentials;
pub mod error;
pub mod exec;
pub mod logging;
pub mod project;
pub mod prompt;
pub mod publish;
pub mod settings;

/// Version reported by `--version`: the build-time `AXYPE_VERSION` if set,
/// otherwise the package version.
pub const VERSION: &str = match option_env!("AXYPE_VERSION") {
    Some(v) => v,
    None => env!("CARGO_PKG_VERSION"),
};
