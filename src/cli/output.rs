//! Shared CLI output helpers.
//!
//! Color scheme (console handles NO_COLOR and non-tty detection):
//! - Green: success
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: names, commands, hints
//! - Dimmed: secondary info

use console::style;
use std::fmt::Display;

/// Print a success message with checkmark.
///
/// Example: `✓ added aws-project1`
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green(), msg);
}

/// Print an error message to stderr.
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red(), msg);
}

/// Print a warning message.
pub fn warn(msg: &str) {
    println!("{} {}", style("⚠").yellow(), msg);
}

/// Print a hint message.
///
/// Example: `→ run: source aws_env.sh`
pub fn hint(msg: &str) {
    println!("{} {}", style("→").cyan(), style(msg).cyan());
}

/// Print a bold section header.
pub fn header(title: &str) {
    println!("{}", style(title).bold());
}

/// Print a key-value pair (label dimmed, value bold).
pub fn kv(label: &str, value: impl Display) {
    println!("  {}  {}", style(label).dim(), style(value).bold());
}

/// Print a dimmed/secondary message.
pub fn dimmed(msg: &str) {
    println!("{}", style(msg).dim());
}

/// Format a credential or key name for inline use.
pub fn key(k: &str) -> String {
    style(k).cyan().to_string()
}
