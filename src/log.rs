//! Simple file-based logging for debugging
//!
//! Nothing is written until [`init`] opens a log file; before that the
//! `log!` macros are no-ops, which keeps tests quiet.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::{const_mutex, Mutex};

static LOG_FILE: Mutex<Option<File>> = const_mutex(None);

/// Get the directory where the executable is located
pub fn exe_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|d| d.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Default log file, next to the executable
pub fn default_log_path() -> PathBuf {
    exe_dir().join("coastal-catalog.log")
}

/// Start logging to `path`, truncating any previous log
pub fn init(path: &Path) -> std::io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;
    *LOG_FILE.lock() = Some(file);

    log("=== Coastal Catalog Log Started ===");
    Ok(())
}

/// Stop logging and close the file
pub fn shutdown() {
    LOG_FILE.lock().take();
}

/// Log a message to the file
pub fn log(msg: &str) {
    let mut guard = LOG_FILE.lock();
    if let Some(file) = guard.as_mut() {
        let ts = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let _ = writeln!(file, "[{}] {}", ts, msg);
        let _ = file.flush();
    }
}

/// Log a formatted message
#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::log::log(&format!($($arg)*))
    };
}

/// Log with function context
#[macro_export]
macro_rules! log_fn {
    ($fn_name:expr) => {
        $crate::log::log(&format!("-> {}", $fn_name))
    };
    ($fn_name:expr, $($arg:tt)*) => {
        $crate::log::log(&format!("-> {}: {}", $fn_name, format!($($arg)*)))
    };
}
