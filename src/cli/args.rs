//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::config::BridgeConfig;

/// local-notifier - native desktop notifications over a method channel
#[derive(Parser, Debug)]
#[command(name = "local-notifier")]
#[command(version)]
#[command(about = "Desktop notification bridge serving the local_notifier method channel over stdio")]
#[command(long_about = None)]
pub struct Cli {
    /// Config file to use instead of the XDG default
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Application name shown by the OS
    #[arg(long, value_name = "NAME", global = true)]
    pub app_name: Option<String>,

    /// Method channel name to accept calls for
    #[arg(long, value_name = "NAME", global = true)]
    pub channel: Option<String>,

    /// Notification sound ("default" for the platform sound)
    #[arg(long, value_name = "SOUND", global = true)]
    pub sound: Option<String>,

    /// Skip the notification permission request at startup
    #[arg(long, global = true)]
    pub no_permission_request: bool,

    /// Log filter used when RUST_LOG is unset (e.g. info, debug)
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Config values given on the command line
    pub fn to_config(&self) -> BridgeConfig {
        BridgeConfig {
            app_name: self.app_name.clone(),
            channel: self.channel.clone(),
            sound: self.sound.clone(),
            request_permission: if self.no_permission_request {
                Some(false)
            } else {
                None
            },
            log_level: self.log_level.clone(),
        }
    }
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve method calls on stdin/stdout (default)
    Serve,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Show config file path
    Path,
    /// Show the effective configuration
    Show,
}
