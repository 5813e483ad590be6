//! Session journal for the binary.
//!
//! Stdout carries raw escape sequences, so the journal never writes there.
//! Entries go to `session-YYYYMMDD-HHMMSS.log` in the log directory, which
//! is created on the first entry.


use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Local;
use strum_macros::{AsRefStr, Display};

use crate::extensions::string::ToEscaped;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "UPPERCASE")]
pub enum LogLevel {
    Info,
    Error,
}

pub struct Logger {
    journal: Mutex<Journal>,
    enabled: AtomicBool,
}

struct Journal {
    dir: PathBuf,
    file: Option<File>,
    opened: bool,
}

impl Journal {
    // Opening is tried once per session.
    fn file(&mut self) -> Option<&mut File> {
        if !self.opened {
            self.opened = true;
            match open_session_file(&self.dir) {
                Ok(file) => self.file = Some(file),
                Err(err) => eprintln!(
                    "WARN: File logging unavailable; continuing without a log file. ({err})"
                ),
            }
        }
        self.file.as_mut()
    }
}

fn open_session_file(dir: &Path) -> std::io::Result<File> {
    fs::create_dir_all(dir)?;
    let stamp = Local::now().format("%Y%m%d-%H%M%S");
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(format!("session-{stamp}.log")))
}

impl Logger {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            journal: Mutex::new(Journal {
                dir: dir.into(),
                file: None,
                opened: false,
            }),
            enabled: AtomicBool::new(true),
        }
    }

    pub fn set_file_logging_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    fn record(&self, level: LogLevel, message: &str) {
        if !self.enabled.load(Ordering::SeqCst) {
            return;
        }
        let Ok(mut journal) = self.journal.lock() else {
            return;
        };
        if let Some(file) = journal.file() {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
            let _ = writeln!(file, "[{timestamp}] {:<5} {message}", level.as_ref());
        }
    }

    /// Record a rendered sequence in readable form with its byte length.
    pub fn emitted(&self, operation: &str, sequence: &str) {
        let line = format!(
            "emit {operation} -> {} ({} bytes)",
            sequence.to_escaped(),
            sequence.len()
        );
        self.record(LogLevel::Info, &line);
    }

    pub fn config_changed(&self, key: &str, old: &str, new: &str, path: &Path) {
        let line = format!("config {key}: {old} -> {new} ({})", path.display());
        self.record(LogLevel::Info, &line);
    }

    pub fn error(&self, message: impl AsRef<str>) {
        self.record(LogLevel::Error, message.as_ref());
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("enabled", &self.enabled.load(Ordering::SeqCst))
            .finish()
    }
}
