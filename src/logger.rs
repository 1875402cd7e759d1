//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` / `debug_do!` macros for output shown only with `--verbose`
//! - per-file status lines (`status_updated`, `status_unchanged`, `status_error`)
//!
//! # Example
//!
//! ```ignore
//! log!("rewrite"; "processing {} files", count);
//! status_updated("index.html", "wrapped 3 images");
//! ```

use owo_colors::{OwoColorize, Stream, Style};
use std::{
    io::{Write, stderr, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

/// Execute code only when --verbose is enabled
///
/// Use this to avoid computing debug data when not needed.
#[macro_export]
macro_rules! debug_do {
    ($($body:tt)*) => {{
        if $crate::logger::is_verbose() {
            $($body)*
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);

    let mut stdout = stdout().lock();
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let prefix = format!("[{module}]");
    let style = match module_lower {
        "error" => Style::new().bright_red().bold(),
        "dry-run" => Style::new().bright_blue().bold(),
        "done" => Style::new().bright_green().bold(),
        _ => Style::new().bright_yellow().bold(),
    };
    paint(&prefix, style, Stream::Stdout)
}

/// Style `text` when `stream` supports color (honors `--color`).
fn paint(text: &str, style: Style, stream: Stream) -> String {
    text.if_supports_color(stream, |t| t.style(style)).to_string()
}

// ============================================================================
// File Status
// ============================================================================

/// Build a status line: `<symbol> <path> <detail>`.
fn status_line(symbol: &str, path: &str, detail: &str) -> String {
    let mut line = String::with_capacity(symbol.len() + path.len() + detail.len() + 2);
    if !symbol.is_empty() {
        line.push_str(symbol);
        line.push(' ');
    }
    line.push_str(path);
    if !detail.is_empty() {
        line.push(' ');
        line.push_str(detail);
    }
    line
}

/// File was (or would be) rewritten (✓ prefix, green).
pub fn status_updated(path: &str, detail: &str) {
    let symbol = paint("✓", Style::new().green(), Stream::Stdout);
    println!("{}", status_line(&symbol, path, detail));
}

/// File left untouched (dimmed, no symbol).
pub fn status_unchanged(path: &str) {
    let detail = paint("unchanged", Style::new().dimmed(), Stream::Stdout);
    println!("{}", status_line("", path, &detail));
}

/// File failed (✗ prefix, red). The error itself is reported by `main`.
pub fn status_error(path: &str) {
    let symbol = paint("✗", Style::new().red(), Stream::Stderr);
    let mut stderr = stderr().lock();
    writeln!(stderr, "{}", status_line(&symbol, path, "")).ok();
}

// ============================================================================
// Tests
// ============================================================================
