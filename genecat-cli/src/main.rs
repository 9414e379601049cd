#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::process;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use cmd::{gene_lengths, zero_counts};
use human_panic::setup_panic;
use lazy_static::lazy_static;

use crate::logging::init_logging;
use crate::progress_bar::CliProgressBar;

mod cli;
mod cmd;
mod csv_stat;
mod logging;
mod opts;
mod progress_bar;

lazy_static! {
    pub(crate) static ref PROGRESS_BAR: CliProgressBar = CliProgressBar::new();
}

/// Exit status for invalid command line usage.
const USAGE_EXIT_CODE: i32 = 1;

fn main() -> anyhow::Result<()> {
    setup_panic!();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // `--help` and `--version` are reported as errors too
            process::exit(if e.use_stderr() { USAGE_EXIT_CODE } else { 0 });
        }
    };

    if !cli.no_progress {
        PROGRESS_BAR.show();
    }

    init_logging(cli.verbose.log_level_filter()).expect("Could not initialize logging");

    match &cli.command {
        Commands::GeneLengths { input, csv } => {
            let reader = input.as_reader()?;
            let length = reader.length()?;

            gene_lengths::gene_lengths(reader.into_read(), length, *csv)
                .context("Failed to compute gene length statistics")?;
        }
        Commands::ZeroCounts { input, csv } => {
            let reader = input.as_reader()?;

            zero_counts::zero_counts(reader.into_read(), *csv)
                .context("Failed to count zeros in the catalog statistics table")?;
        }
    }

    PROGRESS_BAR.finish();
    Ok(())
}
