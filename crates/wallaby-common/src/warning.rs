//! Renderer warnings with colored terminal output.
//!
//! Malformed input is normalized rather than rejected, so the only trace of
//! a dropped or substituted value is a diagnostic on stderr. Each unique
//! message is printed once to keep repeated serialization from spamming
//! the terminal.

use std::collections::HashSet;
use std::sync::{Mutex, OnceLock};

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Global set of warnings that have already been printed.
fn warned() -> &'static Mutex<HashSet<String>> {
    static WARNED: OnceLock<Mutex<HashSet<String>>> = OnceLock::new();
    WARNED.get_or_init(|| Mutex::new(HashSet::new()))
}

/// Warn about malformed or unsupported input (prints once per unique message).
///
/// # Example
/// ```ignore
/// warn_once("CSS", "grid-template row 2 has no matching area; dropped");
/// ```
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let first_time = warned().lock().unwrap().insert(key);

    if first_time {
        eprintln!("{YELLOW}[Wallaby {component}] ⚠ {message}{RESET}");
    }
}

/// Clear all recorded warnings (call when loading a new document).
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn clear_warnings() {
    warned().lock().unwrap().clear();
}
