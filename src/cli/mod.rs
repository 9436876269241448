//! CLI layer - Command-line interface
//!
//! Contains argument parsing, the stdio method channel, output
//! formatting, and the main application runner.

pub mod app;
pub mod args;
pub mod channel;
pub mod config_cmd;
pub mod presenter;

// Re-export commonly used types
pub use app::{run_serve, EXIT_ERROR, EXIT_SUCCESS};
pub use args::{Cli, Commands, ConfigAction};
pub use channel::{MethodChannel, ReplyEnvelope};
pub use presenter::Presenter;
