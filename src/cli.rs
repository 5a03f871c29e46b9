//! Command-line interface definition.
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::settings::DEFAULT_PUBLISH_PATH;

/// Top-level CLI entry point for the axype tool.
#[derive(Parser, Debug)]
#[command(
    name = "axype",
    about = "Scaffold Axype projects and publish paste sources",
    version = crate::VERSION
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Overrides shared by every subcommand.
    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOpts {
    /// Override the configuration directory (default: ~/.axype)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Override the publish endpoint
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initializes a template Axype project
    #[command(visible_alias = "i")]
    Init,
    /// Updates your local Axype API token. It is used by the `publish` command
    #[command(visible_alias = "st")]
    SetToken,
    /// Removes your local Axype API token
    RemoveToken,
    /// Publishes the current paste source to the Axype API
    Publish(PublishOpts),
}

/// Options for the `publish` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct PublishOpts {
    /// The paste name
    pub name: String,

    /// Path of paste's source
    #[arg(default_value = DEFAULT_PUBLISH_PATH)]
    pub path: String,
}
