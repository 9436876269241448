//! Notification bridge use case
//!
//! Dispatches `notify` and `close` method calls to a [`NotificationCenter`]
//! and keeps the registry of notifications the OS has accepted.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::Mutex;

use crate::domain::method::{MethodCall, MethodResponse};
use crate::domain::notification::{CloseArgs, NotificationRequest, NotificationSound, NotifyArgs};
use crate::domain::registry::NotificationRegistry;

use super::ports::{AuthorizationOptions, NotificationCenter, NotificationError};

/// Bridge settings
#[derive(Debug, Clone)]
pub struct BridgeOptions {
    /// Sound attached to every notification
    pub sound: NotificationSound,
    /// Whether `start` asks the OS for permission
    pub request_permission: bool,
}

impl Default for BridgeOptions {
    fn default() -> Self {
        Self {
            sound: NotificationSound::Default,
            request_permission: true,
        }
    }
}

struct BridgeInner<C> {
    center: C,
    registry: Mutex<NotificationRegistry>,
    options: BridgeOptions,
}

/// Bridge between method calls and the OS notification center.
///
/// Cloning is cheap; clones share the center and the registry.
pub struct NotificationBridge<C> {
    inner: Arc<BridgeInner<C>>,
}

impl<C> Clone for NotificationBridge<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: NotificationCenter + 'static> NotificationBridge<C> {
    /// Create a bridge without contacting the OS
    pub fn new(center: C, options: BridgeOptions) -> Self {
        Self {
            inner: Arc::new(BridgeInner {
                center,
                registry: Mutex::new(NotificationRegistry::new()),
                options,
            }),
        }
    }

    /// Create a bridge and, if enabled, request permission in the background.
    ///
    /// Must be called within a tokio runtime. The permission result is only
    /// logged; it never gates `notify`.
    pub fn start(center: C, options: BridgeOptions) -> Self {
        let bridge = Self::new(center, options);
        if bridge.inner.options.request_permission {
            let background = bridge.clone();
            tokio::spawn(async move {
                background.request_permission().await;
            });
        }
        bridge
    }

    /// Access the underlying notification center
    pub fn center(&self) -> &C {
        &self.inner.center
    }

    /// Ask the OS for alert, sound, and badge permission and log the outcome
    pub async fn request_permission(&self) -> bool {
        match self
            .inner
            .center
            .request_authorization(AuthorizationOptions::all())
            .await
        {
            Ok(true) => {
                tracing::debug!("notification permission granted");
                true
            }
            Ok(false) => {
                tracing::warn!("notification permission denied");
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to request notification permission");
                false
            }
        }
    }

    /// Dispatch a method call by name
    pub async fn handle(&self, call: MethodCall) -> MethodResponse {
        match call.method.as_str() {
            "notify" => self.notify(&call.arguments).await,
            "close" => self.close(&call.arguments).await,
            other => {
                tracing::debug!(method = other, "method not implemented");
                MethodResponse::NotImplemented
            }
        }
    }

    /// Handle `notify`: validate, submit, and track on success.
    ///
    /// Resolves to `true` once the OS accepted the request, `false` if it
    /// rejected it.
    pub async fn notify(&self, arguments: &Value) -> MethodResponse {
        let args = match NotifyArgs::from_value(arguments) {
            Ok(args) => args,
            Err(e) => return e.into(),
        };

        let request = args.into_request(self.inner.options.sound.clone());
        MethodResponse::success(self.show(request).await.is_ok())
    }

    /// Submit a request and track it once the OS accepts it.
    ///
    /// On failure the registry is left unchanged and the error is returned.
    pub async fn show(&self, request: NotificationRequest) -> Result<(), NotificationError> {
        if let Err(e) = self.inner.center.add(&request).await {
            tracing::warn!(
                identifier = %request.identifier,
                error = %e,
                "error adding notification"
            );
            return Err(e);
        }

        let identifier = request.identifier.clone();
        let replaced = self.inner.registry.lock().await.track(request);
        tracing::debug!(
            identifier = %identifier,
            replaced = replaced.is_some(),
            "notification tracked"
        );
        Ok(())
    }

    /// Handle `close`: stop tracking the identifier.
    ///
    /// The notification already on screen is left in place.
    pub async fn close(&self, arguments: &Value) -> MethodResponse {
        let args = match CloseArgs::from_value(arguments) {
            Ok(args) => args,
            Err(e) => return e.into(),
        };

        let removed = self.inner.registry.lock().await.forget(&args.identifier);
        tracing::debug!(
            identifier = %args.identifier,
            was_tracked = removed.is_some(),
            "notification closed"
        );
        MethodResponse::success(true)
    }

    /// Tracked request for an identifier
    pub async fn tracked(&self, identifier: &str) -> Option<NotificationRequest> {
        self.inner.registry.lock().await.get(identifier).cloned()
    }

    /// All tracked identifiers, sorted
    pub async fn tracked_identifiers(&self) -> Vec<String> {
        self.inner.registry.lock().await.identifiers()
    }
}
