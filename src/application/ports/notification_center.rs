//! Notification center port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::notification::NotificationRequest;

/// Notification center errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationError {
    #[error("Failed to request authorization: {0}")]
    AuthorizationFailed(String),

    #[error("Failed to show notification: {0}")]
    SendFailed(String),

    #[error("Notification task failed: {0}")]
    TaskFailed(String),
}

/// Capabilities requested when asking for notification permission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthorizationOptions {
    pub alert: bool,
    pub sound: bool,
    pub badge: bool,
}

impl AuthorizationOptions {
    /// Alert, sound, and badge
    pub const fn all() -> Self {
        Self {
            alert: true,
            sound: true,
            badge: true,
        }
    }
}

impl Default for AuthorizationOptions {
    fn default() -> Self {
        Self::all()
    }
}

/// Port for the operating system's notification service
#[async_trait]
pub trait NotificationCenter: Send + Sync {
    /// Ask the OS for permission to post notifications.
    ///
    /// # Returns
    /// Whether permission was granted
    async fn request_authorization(
        &self,
        options: AuthorizationOptions,
    ) -> Result<bool, NotificationError>;

    /// Submit a request for immediate delivery.
    ///
    /// Any category on the request content applies to this request only.
    async fn add(&self, request: &NotificationRequest) -> Result<(), NotificationError>;
}

/// Blanket implementation for boxed notification centers
#[async_trait]
impl NotificationCenter for Box<dyn NotificationCenter> {
    async fn request_authorization(
        &self,
        options: AuthorizationOptions,
    ) -> Result<bool, NotificationError> {
        self.as_ref().request_authorization(options).await
    }

    async fn add(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        self.as_ref().add(request).await
    }
}
