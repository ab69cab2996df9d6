use std::fs::{create_dir_all, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::Local;

lazy_static::lazy_static! {
    static ref LOG_FILE: Mutex<Option<PathBuf>> = Mutex::new(None);
}

/// Points the logger at a daily file below the user cache directory.
/// Until this is called every `log_*` call is a no-op.
pub fn init_logging() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("gomematic-cli")
        .join("logs");

    init_logging_in(log_dir)
}

pub fn init_logging_in(log_dir: PathBuf) -> Result<PathBuf, Box<dyn std::error::Error>> {
    create_dir_all(&log_dir)?;

    let log_file = log_dir.join(format!("gomematic-cli-{}.log", Local::now().format("%Y%m%d")));

    if let Ok(mut guard) = LOG_FILE.lock() {
        *guard = Some(log_file.clone());
    }

    log_info(&format!("Logging initialized to: {}", log_file.display()));

    Ok(log_file)
}

pub fn log_error(message: &str) {
    log_with_level("ERROR", message);
}

pub fn log_info(message: &str) {
    log_with_level("INFO", message);
}

pub fn log_debug(message: &str) {
    log_with_level("DEBUG", message);
}

/// Records a panic together with where it happened. Installed as a panic
/// hook by `main` when `--debug` is given.
pub fn log_panic_info(info: &std::panic::PanicInfo) {
    let payload = info
        .payload()
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| info.payload().downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_string());

    match info.location() {
        Some(location) => log_error(&format!(
            "PANIC at {}:{}:{} - {}",
            location.file(),
            location.line(),
            location.column(),
            payload
        )),
        None => log_error(&format!("PANIC - {}", payload)),
    }

    log_debug(&format!("Backtrace:\n{}", std::backtrace::Backtrace::capture()));
}

/// One line per outgoing API call.
pub fn log_request(method: &str, url: &str) {
    log_info(&format!("{} {}", method, url));
}

/// A failed API call with whatever the server or transport said. Bodies are
/// logged verbatim and are never shown to the user.
pub fn log_failure(method: &str, url: &str, detail: &str) {
    log_error(&format!("{} {} failed: {}", method, url, detail));
}

fn log_with_level(level: &str, message: &str) {
    let path = match LOG_FILE.lock() {
        Ok(guard) => guard.clone(),
        Err(_) => return,
    };

    // Log lines only ever go to the file; stdout and stderr belong to the
    // command output.
    let Some(log_file) = path else { return };
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(log_file) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let _ = writeln!(file, "[{}] {} - {}", timestamp, level, message);
    }
}
