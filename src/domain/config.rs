//! Bridge configuration value object

use serde::{Deserialize, Serialize};

use super::method::CHANNEL_NAME;
use super::notification::NotificationSound;

/// Bridge configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    pub app_name: Option<String>,
    pub channel: Option<String>,
    pub sound: Option<String>,
    pub request_permission: Option<bool>,
    pub log_level: Option<String>,
}

impl BridgeConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            app_name: Some(CHANNEL_NAME.to_string()),
            channel: Some(CHANNEL_NAME.to_string()),
            sound: Some("default".to_string()),
            request_permission: Some(true),
            log_level: Some("info".to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            app_name: other.app_name.or(self.app_name),
            channel: other.channel.or(self.channel),
            sound: other.sound.or(self.sound),
            request_permission: other.request_permission.or(self.request_permission),
            log_level: other.log_level.or(self.log_level),
        }
    }

    pub fn app_name_or_default(&self) -> &str {
        self.app_name.as_deref().unwrap_or(CHANNEL_NAME)
    }

    pub fn channel_or_default(&self) -> &str {
        self.channel.as_deref().unwrap_or(CHANNEL_NAME)
    }

    /// Get the sound as a NotificationSound, or the platform default if not set
    pub fn sound_or_default(&self) -> NotificationSound {
        self.sound
            .as_deref()
            .map(NotificationSound::from_name)
            .unwrap_or_default()
    }

    /// Get request_permission setting, or true if not set
    pub fn request_permission_or_default(&self) -> bool {
        self.request_permission.unwrap_or(true)
    }

    pub fn log_level_or_default(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }
}
