//! Cross-platform notification center adapter using notify-rust
//!
//! Works on Windows, macOS, and Linux.

use async_trait::async_trait;

use crate::application::ports::{AuthorizationOptions, NotificationCenter, NotificationError};
use crate::domain::notification::{NotificationRequest, NotificationSound};

/// Cross-platform notification center using notify-rust
pub struct NotifyRustCenter {
    /// Application name for notifications
    app_name: String,
}

impl NotifyRustCenter {
    /// Create a new notify-rust notification center
    pub fn new() -> Self {
        Self {
            app_name: crate::domain::CHANNEL_NAME.to_string(),
        }
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }
}

impl Default for NotifyRustCenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Sound name understood by the platform's notification service
fn platform_sound_name(sound: &NotificationSound) -> &str {
    match sound {
        NotificationSound::Named(name) => name,
        #[cfg(any(target_os = "macos", target_os = "windows"))]
        NotificationSound::Default => "Default",
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        NotificationSound::Default => "message-new-instant",
    }
}

#[cfg(all(unix, not(target_os = "macos")))]
fn probe_server() -> Result<bool, NotificationError> {
    let info = notify_rust::get_server_information()
        .map_err(|e| NotificationError::AuthorizationFailed(e.to_string()))?;
    tracing::debug!(
        server = %info.name,
        vendor = %info.vendor,
        version = %info.version,
        "notification server available"
    );
    Ok(true)
}

// Other platforms grant on first delivery
#[cfg(not(all(unix, not(target_os = "macos"))))]
fn probe_server() -> Result<bool, NotificationError> {
    Ok(true)
}

#[async_trait]
impl NotificationCenter for NotifyRustCenter {
    async fn request_authorization(
        &self,
        options: AuthorizationOptions,
    ) -> Result<bool, NotificationError> {
        tracing::debug!(
            alert = options.alert,
            sound = options.sound,
            badge = options.badge,
            "requesting notification authorization"
        );

        tokio::task::spawn_blocking(probe_server)
            .await
            .map_err(|e| NotificationError::TaskFailed(format!("Task join error: {}", e)))?
    }

    async fn add(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        let app_name = self.app_name.clone();
        let request = request.clone();

        // notify-rust operations can block, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            let content = &request.content;
            let mut notification = notify_rust::Notification::new();
            notification
                .appname(&app_name)
                .summary(&content.title)
                .body(&content.body)
                .sound_name(platform_sound_name(&content.sound));

            if let Some(category) = &content.category {
                for action in &category.actions {
                    notification.action(&action.identifier, &action.title);
                }
            }

            notification
                .show()
                .map(|_| ())
                .map_err(|e| NotificationError::SendFailed(e.to_string()))
        })
        .await
        .map_err(|e| NotificationError::TaskFailed(format!("Task join error: {}", e)))?
    }
}
