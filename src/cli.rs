use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Optionally specify the path to the config file to use.
    /// If not set, then the `ROSTER_CONFIG_FILE` environment variable will be used.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Backend root, overriding the config file.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Interactive session (the default).
    Shell,
    /// Print the roster once.
    List,
    /// Add one monitor.
    Add {
        name: String,
        email: String,
        skill: String,
        day: String,
        hour: String,
    },
    /// Delete the monitor with this email.
    Delete {
        email: String,

        /// Do not ask for confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}
