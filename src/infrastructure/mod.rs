//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the OS notification service and the filesystem.

pub mod config;
pub mod notification;

// Re-export adapters
pub use config::XdgConfigStore;
pub use notification::{create_notification_center, NotifyRustCenter};
