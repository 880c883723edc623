use std::fs::{create_dir_all, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::Local;
use colored::*;

lazy_static::lazy_static! {
    static ref LOGGER: Mutex<LoggerState> = Mutex::new(LoggerState::default());
}

#[derive(Default)]
struct LoggerState {
    verbose: bool,
    file: Option<PathBuf>,
}

/// Configure the process logger. Lines always go to stderr; with
/// `to_file` they are also appended to a timestamped file in the cache dir.
pub fn init_logging(verbose: bool, to_file: bool) -> std::io::Result<Option<PathBuf>> {
    if let Ok(mut state) = LOGGER.lock() {
        state.verbose = verbose;
    }

    let file = if to_file {
        let log_dir = dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp"))
            .join("review-notifier")
            .join("logs");
        create_dir_all(&log_dir)?;
        Some(log_dir.join(format!(
            "review-notifier-{}.log",
            Local::now().format("%Y%m%d-%H%M%S")
        )))
    } else {
        None
    };

    if let Ok(mut state) = LOGGER.lock() {
        state.file = file.clone();
    }

    if let Some(path) = &file {
        log_debug(&format!("Logging to {}", path.display()));
    }
    Ok(file)
}

pub fn log_error(message: &str) {
    log_with_level(Level::Error, message);
}

pub fn log_warn(message: &str) {
    log_with_level(Level::Warn, message);
}

pub fn log_info(message: &str) {
    log_with_level(Level::Info, message);
}

pub fn log_debug(message: &str) {
    log_with_level(Level::Debug, message);
}

#[derive(Clone, Copy, PartialEq)]
enum Level {
    Error,
    Warn,
    Info,
    Debug,
}

impl Level {
    fn label(self) -> &'static str {
        match self {
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
        }
    }

    fn colored(self) -> ColoredString {
        match self {
            Level::Error => self.label().red().bold(),
            Level::Warn => self.label().yellow(),
            Level::Info => self.label().green(),
            Level::Debug => self.label().dimmed(),
        }
    }
}

fn log_with_level(level: Level, message: &str) {
    let (verbose, file) = match LOGGER.lock() {
        Ok(state) => (state.verbose, state.file.clone()),
        Err(poisoned) => {
            let state = poisoned.into_inner();
            (state.verbose, state.file.clone())
        }
    };

    if level == Level::Debug && !verbose {
        return;
    }

    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    eprintln!("[{}] {} - {}", timestamp, level.colored(), message);

    if let Some(log_file) = file {
        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(log_file) {
            let _ = writeln!(file, "[{}] {} - {}", timestamp, level.label(), message);
        }
    }
}
