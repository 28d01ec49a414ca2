//! Application logging
//!
//! [`Logger`] keeps a bounded, timestamped buffer in memory for the logs
//! panel and can mirror every line to a file. [`install`] routes the `log`
//! facade through a `fern` dispatcher into a `Logger`, so library code just
//! uses `log::info!` and friends.

use crate::constants::LOG_BUFFER_CAPACITY;
use anyhow::{Context, Result};
use chrono::Local;
use std::collections::VecDeque;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

type FileWriter = Arc<Mutex<BufWriter<File>>>;

/// Shared logger that can be used across the application
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<VecDeque<String>>>,
    file_writer: Option<FileWriter>,
}

impl Logger {
    /// In-memory logger with no file output
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(VecDeque::new())),
            file_writer: None,
        }
    }

    /// Build a logger from the `[logging] enabled` setting
    pub fn from_config(enabled: bool) -> Result<Self> {
        if enabled {
            Self::with_log_file(Self::get_log_file_path()?)
        } else {
            Ok(Self::new())
        }
    }

    /// Logger that also appends to `path`
    pub fn with_log_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;

        Ok(Self {
            logs: Arc::new(Mutex::new(VecDeque::new())),
            file_writer: Some(Arc::new(Mutex::new(BufWriter::new(file)))),
        })
    }

    /// Default log file location
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("partyplay").join("partyplay.log"))
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Some(writer) = &self.file_writer {
            if let Ok(mut writer) = writer.lock() {
                let _ = writeln!(writer, "{}", formatted_message);
                let _ = writer.flush();
            }
        }

        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() == LOG_BUFFER_CAPACITY {
                logs.pop_front();
            }
            logs.push_back(formatted_message);
        }
    }

    /// Get all logs, newest first
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    pub fn has_file_writer(&self) -> bool {
        self.file_writer.is_some()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Route the `log` facade into `logger`. Only the first call in a process
/// takes effect.
pub fn install(logger: Logger, level: log::LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| out.finish(format_args!("{:<5} {}: {}", record.level(), record.target(), message)))
        .level(level)
        .level_for("tungstenite", log::LevelFilter::Warn)
        .level_for("tokio_tungstenite", log::LevelFilter::Warn)
        .chain(fern::Output::call(move |record| logger.log(record.args().to_string())))
        .apply()
        .context("Failed to install logger")
}
