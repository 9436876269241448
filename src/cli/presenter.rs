//! CLI presenter for output formatting

use colored::*;

/// Presenter for CLI output formatting.
///
/// Status lines go to stderr; stdout is reserved for command output.
#[derive(Debug, Default)]
pub struct Presenter;

impl Presenter {
    pub fn new() -> Self {
        Self
    }

    /// Print success message
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print error message
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print command output to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }
}
