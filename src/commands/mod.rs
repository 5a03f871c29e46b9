//! Subcommand orchestration.
pub mod init;
pub mod publish;
pub mod token;

use std::env;

use anyhow::{Context as _, Result};

use crate::cli::{Cli, Command};
use crate::exec::SystemExecutor;
use crate::logging::Logger;
use crate::prompt::TerminalPrompter;
use crate::settings::Settings;

/// Run the parsed subcommand against the real terminal, filesystem and network.
///
/// Settings are only resolved for the commands that use them, so `init`
/// works without a home directory.
///
/// # Errors
///
/// Returns whatever the subcommand returns; the caller maps it to exit code `1`.
pub fn dispatch(cli: &Cli, log: &Logger) -> Result<()> {
    match &cli.command {
        Command::Init => {
            let cwd = env::current_dir().context("failed to determine working directory")?;
            let outcome = init::run(&SystemExecutor, &TerminalPrompter, &cwd, log)?;
            log.debug(&format!("init finished: {outcome:?}"));
            Ok(())
        }
        Command::SetToken => {
            let settings = Settings::resolve(&cli.global)?;
            token::set(&settings, &TerminalPrompter, log)
        }
        Command::RemoveToken => {
            let settings = Settings::resolve(&cli.global)?;
            token::remove(&settings, log)
        }
        Command::Publish(opts) => {
            let settings = Settings::resolve(&cli.global)?;
            let cwd = env::current_dir().context("failed to determine working directory")?;
            publish::run(opts, &settings, &cwd, log)
        }
    }
}
