//! Append-only file log in the user's cache directory.
//!
//! Nothing is written until [`init_logging`] has picked a file, so library
//! callers and tests stay silent.

use std::fs::{create_dir_all, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Local};

use crate::constants::LOG_LEVEL_ENV;
use crate::error::LabelResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    Info,
    Debug,
}

impl LogLevel {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }
}

/// One log file plus the most verbose level it accepts.
#[derive(Debug, Clone)]
pub struct LogSink {
    path: PathBuf,
    max_level: LogLevel,
}

impl LogSink {
    pub fn new(path: impl Into<PathBuf>, max_level: LogLevel) -> Self {
        Self { path: path.into(), max_level }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level <= self.max_level
    }

    pub fn write(&self, level: LogLevel, message: &str) {
        if !self.enabled(level) {
            return;
        }
        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(file, "{}", format_line(Local::now(), level, message));
        }
    }
}

lazy_static::lazy_static! {
    static ref SINK: Mutex<Option<LogSink>> = Mutex::new(None);
}

pub fn format_line(at: DateTime<Local>, level: LogLevel, message: &str) -> String {
    format!("{} {:<5} {}", at.format("%Y-%m-%dT%H:%M:%S%.3f"), level.as_str(), message)
}

pub fn log_file_name(at: DateTime<Local>) -> String {
    format!("plane-labels-{}.log", at.format("%Y%m%d-%H%M%S"))
}

fn level_from_env() -> LogLevel {
    std::env::var(LOG_LEVEL_ENV)
        .ok()
        .and_then(|value| LogLevel::parse(&value))
        .unwrap_or(LogLevel::Info)
}

/// Start logging to a fresh file under the cache dir and return its path.
pub fn init_logging() -> LabelResult<PathBuf> {
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("plane-labels")
        .join("logs");
    create_dir_all(&log_dir)?;

    let sink = LogSink::new(log_dir.join(log_file_name(Local::now())), level_from_env());
    let path = sink.path().to_path_buf();
    if let Ok(mut slot) = SINK.lock() {
        *slot = Some(sink);
    }

    log_debug(&format!("Logging to {}", path.display()));
    Ok(path)
}

fn log(level: LogLevel, message: &str) {
    let sink = match SINK.lock() {
        Ok(slot) => slot.clone(),
        Err(_) => return,
    };
    if let Some(sink) = sink {
        sink.write(level, message);
    }
}

pub fn log_error(message: &str) {
    log(LogLevel::Error, message);
}

pub fn log_info(message: &str) {
    log(LogLevel::Info, message);
}

pub fn log_debug(message: &str) {
    log(LogLevel::Debug, message);
}

fn panic_message(info: &std::panic::PanicInfo) -> String {
    let payload = info
        .payload()
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| info.payload().downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_string());

    match info.location() {
        Some(location) => format!("panic at {}:{}: {}", location.file(), location.line(), payload),
        None => format!("panic: {}", payload),
    }
}

/// Panic hook body: the message at error level, the backtrace at debug.
pub fn log_panic_info(info: &std::panic::PanicInfo) {
    log_error(&panic_message(info));
    log_debug(&format!("backtrace:\n{}", std::backtrace::Backtrace::capture()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn levels_parse_case_insensitively() {
        assert_eq!(LogLevel::parse("DEBUG"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse(" error "), Some(LogLevel::Error));
        assert_eq!(LogLevel::parse("trace"), None);
    }

    #[test]
    fn sink_drops_lines_above_its_level() {
        let dir = tempfile::tempdir().unwrap();
        let sink = LogSink::new(dir.path().join("test.log"), LogLevel::Info);

        sink.write(LogLevel::Debug, "hidden");
        sink.write(LogLevel::Error, "Label creation failed");
        sink.write(LogLevel::Info, "Set 2 label(s) on issue-1");

        let contents = std::fs::read_to_string(sink.path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("ERROR Label creation failed"));
        assert!(lines[1].ends_with("INFO  Set 2 label(s) on issue-1"));
    }

    #[test]
    fn line_and_file_name_carry_timestamp() {
        let at = Local.with_ymd_and_hms(2026, 3, 4, 5, 6, 7).unwrap();

        assert_eq!(
            format_line(at, LogLevel::Debug, "Logging to /tmp"),
            "2026-03-04T05:06:07.000 DEBUG Logging to /tmp"
        );
        assert_eq!(log_file_name(at), "plane-labels-20260304-050607.log");
    }
}
