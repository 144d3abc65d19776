//! Pagefeed command-line driver.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use pagefeed::{
    cli::{Cli, Commands, build::build_feed},
    log, logger,
};

fn main() {
    if let Err(e) = run() {
        log!("error"; "{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    match &cli.command {
        Commands::Build { build_args } => {
            logger::set_verbose(build_args.verbose);
            build_feed(&cli.config, build_args)
        }
    }
}
