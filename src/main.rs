mod cli;
mod logging;

use std::process;

use anyhow::{Context, Result};
use canada_day::config::AppConfig;
use canada_day::session::{self, SessionError};
use canada_day::{calculate_canada_day, report, server, validate_year};
use clap::Parser;
use tracing::{debug, info};

use crate::cli::{Cli, Command, ServeArgs};

const PROGRAM: &str = "canada-day";

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            1
        }
    };
    process::exit(code);
}

fn run(cli: Cli) -> Result<i32> {
    match (cli.command, cli.year) {
        (Some(Command::Serve(args)), _) => serve(args).map(|()| 0),
        (None, Some(year)) => {
            if !cli.rest.is_empty() {
                debug!(ignored = ?cli.rest, "extra arguments");
            }
            Ok(one_shot(&year))
        }
        (None, None) => Ok(interactive()),
    }
}

fn one_shot(input: &str) -> i32 {
    debug!(input, "one-shot calculation");
    let year = match validate_year(input) {
        Ok(year) => year,
        Err(err) => {
            println!("❌ Error: {err}");
            print!("{}", report::usage(PROGRAM));
            return 1;
        }
    };

    match calculate_canada_day(i64::from(year.get())) {
        Ok(result) => {
            print!("{}", report::summary(&result));
            0
        }
        Err(err) => {
            println!("❌ Error: {err}");
            1
        }
    }
}

fn interactive() -> i32 {
    match session::run_on_terminal() {
        Ok(count) => {
            debug!(count, "session finished");
            0
        }
        Err(SessionError::NotInteractive) => {
            print!("{}", report::not_interactive());
            1
        }
        Err(err) => {
            println!("\n❌ An error occurred: {err}\n");
            1
        }
    }
}

fn serve(args: ServeArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("failed to load config: {}", path.display()))?,
        None => AppConfig::default(),
    };
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if args.seed.is_some() {
        config.sales.seed = args.seed;
    }
    info!(addr = %config.server.addr(), "starting server");

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?
        .block_on(server::serve(&config))
        .with_context(|| format!("server on {} failed", config.server.addr()))
}
