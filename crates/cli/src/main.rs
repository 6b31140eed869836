mod cli;
mod error;
mod fetch;
mod genres;
mod histogram;
mod list;
mod report;
mod source;
mod top;

use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use crate::cli::Cli;
use crate::cli::Commands;
use crate::genres::genres;
use crate::histogram::histogram;
use crate::list::list;
use crate::report::report;
use crate::top::top;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let result = match cli.command {
        Commands::Report(args) => report(args),
        Commands::Genres(args) => genres(args),
        Commands::List(args) => list(args),
        Commands::Histogram(args) => histogram(args),
        Commands::Top(args) => top(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
