use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Find out what day of the week Canada Day falls on.
///
/// With a YEAR, prints the answer and exits. With no arguments, starts an
/// interactive prompt.
#[derive(Parser)]
#[command(
    name = "canada-day",
    version,
    about = "Find out what day of the week Canada Day falls on",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Year to calculate (1600-3000).
    #[arg(allow_hyphen_values = true)]
    pub year: Option<String>,

    /// Anything after the year is ignored.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub rest: Vec<String>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Serve the HTTP API.
    Serve(ServeArgs),
}

/// Arguments for the `serve` subcommand.
#[derive(clap::Args)]
pub struct ServeArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override listen address from config.
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Override listen port from config.
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override mock sales RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,
}
