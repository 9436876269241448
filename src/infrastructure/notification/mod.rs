//! Notification infrastructure module
//!
//! Provides the OS notification center through notify-rust.

mod notify_rust;

pub use self::notify_rust::NotifyRustCenter;

use crate::application::ports::NotificationCenter;

/// Create the default notification center for the current platform
pub fn create_notification_center(app_name: &str) -> Box<dyn NotificationCenter> {
    Box::new(NotifyRustCenter::with_app_name(app_name))
}
