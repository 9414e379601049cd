use std::fmt::Arguments;

use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

use crate::PROGRESS_BAR;

/// Crates whose debug and trace messages are shown; everything else is
/// limited to `info` and above.
const VERBOSE_TARGETS: [&str; 2] = ["genecat", "genecat_cli"];

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
            && (metadata.level() <= Level::Info || is_verbose_target(metadata.target()))
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let msg = format_message(record.level(), record.target(), record.args());

            if PROGRESS_BAR.is_hidden() {
                eprintln!("{}", msg);
            } else {
                PROGRESS_BAR.println(msg);
            }
        }
    }

    fn flush(&self) {}
}

fn is_verbose_target(target: &str) -> bool {
    let krate = target.split("::").next().unwrap_or(target);
    VERBOSE_TARGETS.contains(&krate)
}

fn format_message(level: Level, target: &str, args: &Arguments<'_>) -> String {
    format!(
        "{} [{:<5}] [{}] {}",
        Local::now().format("%Y-%m-%d %H:%M:%S%.6f"),
        level,
        target,
        args
    )
}

static LOGGER: Logger = Logger;

pub fn init_logging(filter: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(filter);

    Ok(())
}
