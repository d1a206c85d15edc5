//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::auth::AuthArgs;
use crate::commands::item::ItemCommand;
use crate::config::ConnectionArgs;

/// Podio CLI tool for app item exploration.
#[derive(Parser, Debug)]
#[command(name = "podio")]
#[command(author, version = env!("PODIO_CLI_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Authenticate with the app credentials and show the token lifetime
    Auth(AuthArgs),

    /// Item operations
    Item(ItemCommand),
}
