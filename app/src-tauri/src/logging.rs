//! FILENAME: app/src-tauri/src/logging.rs
// PURPOSE: Process-wide error log (append-only, never read back).
// FORMAT: timestamp|level|category|message

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use once_cell::sync::Lazy;

/// Global log file handle. None until [`init_log_file`] succeeds; logging
/// degrades to console-only in that case.
pub static LOG_FILE: Lazy<Mutex<Option<File>>> = Lazy::new(|| Mutex::new(None));

/// Cached log path for diagnostics.
static LOG_PATH: Lazy<Mutex<Option<PathBuf>>> = Lazy::new(|| Mutex::new(None));

const LOG_FILE_NAME: &str = "datascope.log";

/// Where the log lives: next to the manifest during development, next to
/// the executable otherwise.
fn resolve_log_path() -> Result<PathBuf, String> {
    if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
        return Ok(PathBuf::from(manifest_dir).join(LOG_FILE_NAME));
    }
    let exe = std::env::current_exe().map_err(|e| format!("Failed to get exe path: {}", e))?;
    let dir = exe
        .parent()
        .ok_or("No parent directory for executable")?
        .to_path_buf();
    Ok(dir.join(LOG_FILE_NAME))
}

pub fn get_log_path() -> Result<PathBuf, String> {
    if let Ok(guard) = LOG_PATH.lock() {
        if let Some(ref path) = *guard {
            return Ok(path.clone());
        }
    }

    let log_path = resolve_log_path()?;

    if let Ok(mut guard) = LOG_PATH.lock() {
        *guard = Some(log_path.clone());
    }

    Ok(log_path)
}

/// Opens the log file in append mode and installs the global handle.
pub fn init_log_file() -> Result<PathBuf, String> {
    let log_path = get_log_path()?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(|e| format!("Failed to open log file {:?}: {}", log_path, e))?;

    let mut log_file = LOG_FILE
        .lock()
        .map_err(|e| format!("Lock error: {}", e))?;
    *log_file = Some(file);

    Ok(log_path)
}

/// Appends one log line: `timestamp|level|category|message`.
pub fn write_log(level: &str, category: &str, message: &str) {
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let line = format!("{}|{}|{}|{}", timestamp, level, category, message);

    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(ref mut file) = *guard {
            if let Err(e) = writeln!(file, "{}", line) {
                eprintln!("[LOG_ERROR] Failed to write: {}", e);
            }
            let _ = file.flush();
        }
    }

    println!("{}", line);
}

// ============================================================================
// TAURI COMMAND HANDLERS FOR LOGGING
// ============================================================================

/// Lets the frontend append to the same file as the backend.
#[tauri::command]
pub fn log_frontend(level: String, category: String, message: String) -> Result<(), String> {
    write_log(&level, &category, &message);
    Ok(())
}

// ============================================================================
// MACRO DEFINITIONS & EXPORTS
// ============================================================================

#[macro_export]
macro_rules! log_debug {
    ($cat:expr, $($arg:tt)*) => {
        $crate::logging::write_log("DEBUG", $cat, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($cat:expr, $($arg:tt)*) => {
        $crate::logging::write_log("INFO", $cat, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($cat:expr, $($arg:tt)*) => {
        $crate::logging::write_log("WARN", $cat, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($cat:expr, $($arg:tt)*) => {
        $crate::logging::write_log("ERROR", $cat, &format!($($arg)*))
    };
}

pub use log_debug;
pub use log_error;
pub use log_info;
pub use log_warn;
