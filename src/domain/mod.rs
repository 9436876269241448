//! Domain layer - Core business logic
//!
//! Contains value objects, the notification registry, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod method;
pub mod notification;
pub mod registry;

// Re-export common types
pub use config::BridgeConfig;
pub use error::*;
pub use method::{MethodCall, MethodError, MethodResponse, CHANNEL_NAME};
pub use notification::{
    CloseArgs, NotificationAction, NotificationCategory, NotificationContent,
    NotificationRequest, NotificationSound, NotifyArgs, CUSTOM_CATEGORY,
};
pub use registry::NotificationRegistry;
