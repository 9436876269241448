//! Method call vocabulary shared by the channel and the bridge

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::ArgumentError;

/// Name of the method channel served by the bridge
pub const CHANNEL_NAME: &str = "local_notifier";

/// Incoming method invocation
#[derive(Debug, Clone, PartialEq)]
pub struct MethodCall {
    pub method: String,
    pub arguments: Value,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, arguments: Value) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }
}

/// Structured error returned to the caller
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MethodError {
    pub code: String,
    pub message: Option<String>,
    pub details: Option<Value>,
}

impl MethodError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: Some(message.into()),
            details: None,
        }
    }
}

impl From<ArgumentError> for MethodError {
    fn from(err: ArgumentError) -> Self {
        Self::new(ArgumentError::CODE, err.to_string())
    }
}

/// Outcome of a method call
#[derive(Debug, Clone, PartialEq)]
pub enum MethodResponse {
    Success(Value),
    Error(MethodError),
    NotImplemented,
}

impl MethodResponse {
    pub fn success(value: impl Into<Value>) -> Self {
        Self::Success(value.into())
    }

    /// Boolean result, if this is a boolean success
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Success(value) => value.as_bool(),
            _ => None,
        }
    }

    /// Error code, if this is an error
    pub fn error_code(&self) -> Option<&str> {
        match self {
            Self::Error(err) => Some(err.code.as_str()),
            _ => None,
        }
    }

    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented)
    }
}

impl From<ArgumentError> for MethodResponse {
    fn from(err: ArgumentError) -> Self {
        Self::Error(err.into())
    }
}
