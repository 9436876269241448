//! Notification request value objects

use serde_json::{Map, Value};

use super::error::ArgumentError;

/// Identifier of the category attached to notifications that carry an action
pub const CUSTOM_CATEGORY: &str = "customCategory";

/// Sound played when a notification is delivered
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NotificationSound {
    /// Platform default sound
    #[default]
    Default,
    /// Named system sound
    Named(String),
}

impl NotificationSound {
    /// Parse a configured sound name ("default" maps to the platform default)
    pub fn from_name(name: &str) -> Self {
        if name.is_empty() || name.eq_ignore_ascii_case("default") {
            Self::Default
        } else {
            Self::Named(name.to_string())
        }
    }
}

/// A selectable action shown on a notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationAction {
    pub identifier: String,
    pub title: String,
}

impl NotificationAction {
    /// Action whose identifier and label are both the given text
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            identifier: text.clone(),
            title: text,
        }
    }
}

/// Group of actions attached to notification content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationCategory {
    pub identifier: String,
    pub actions: Vec<NotificationAction>,
}

impl NotificationCategory {
    /// Category carrying a single action built from `text`.
    ///
    /// Computed per request, so two requests with different action text
    /// never share or overwrite each other's category.
    pub fn for_action_text(text: &str) -> Self {
        Self {
            identifier: CUSTOM_CATEGORY.to_string(),
            actions: vec![NotificationAction::from_text(text)],
        }
    }
}

/// Displayable part of a notification request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationContent {
    pub title: String,
    pub body: String,
    pub sound: NotificationSound,
    pub category: Option<NotificationCategory>,
}

impl NotificationContent {
    /// Label of the single action, if any
    pub fn action_text(&self) -> Option<&str> {
        self.category
            .as_ref()
            .and_then(|c| c.actions.first())
            .map(|a| a.title.as_str())
    }
}

/// A notification submitted to the OS, delivered as soon as accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub identifier: String,
    pub content: NotificationContent,
}

/// Validated arguments of a `notify` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyArgs {
    pub identifier: String,
    pub title: String,
    pub body: String,
    pub action_text: Option<String>,
}

impl NotifyArgs {
    /// Extract arguments from a method call payload.
    ///
    /// Only the first entry of `actions` is read, and only its `text` key.
    /// A malformed `actions` value means no action.
    pub fn from_value(arguments: &Value) -> Result<Self, ArgumentError> {
        let args = arguments.as_object().ok_or(ArgumentError::Notify)?;

        let identifier = required_string(args, "identifier").ok_or(ArgumentError::Notify)?;
        let title = required_string(args, "title").ok_or(ArgumentError::Notify)?;
        let body = required_string(args, "body").ok_or(ArgumentError::Notify)?;

        let action_text = args
            .get("actions")
            .and_then(Value::as_array)
            .and_then(|actions| actions.first())
            .and_then(Value::as_object)
            .and_then(|action| action.get("text"))
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(Self {
            identifier,
            title,
            body,
            action_text,
        })
    }

    /// Build the OS request for these arguments
    pub fn into_request(self, sound: NotificationSound) -> NotificationRequest {
        let category = self
            .action_text
            .as_deref()
            .map(NotificationCategory::for_action_text);

        NotificationRequest {
            identifier: self.identifier,
            content: NotificationContent {
                title: self.title,
                body: self.body,
                sound,
                category,
            },
        }
    }
}

/// Validated arguments of a `close` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseArgs {
    pub identifier: String,
}

impl CloseArgs {
    /// Extract arguments from a method call payload
    pub fn from_value(arguments: &Value) -> Result<Self, ArgumentError> {
        let args = arguments.as_object().ok_or(ArgumentError::Close)?;
        let identifier = required_string(args, "identifier").ok_or(ArgumentError::Close)?;
        Ok(Self { identifier })
    }
}

fn required_string(args: &Map<String, Value>, key: &str) -> Option<String> {
    args.get(key).and_then(Value::as_str).map(str::to_string)
}
