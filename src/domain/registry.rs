//! Notification registry

use std::collections::HashMap;

use super::notification::NotificationRequest;

/// Map from identifier to the last request the OS accepted for it.
///
/// Lifecycle per identifier:
///   ABSENT -> PENDING (submission in flight, not stored)
///   PENDING -> TRACKED (OS accepted, `track`)
///   PENDING -> ABSENT (OS rejected, nothing stored)
///   TRACKED -> ABSENT (`forget`)
#[derive(Debug, Default)]
pub struct NotificationRegistry {
    entries: HashMap<String, NotificationRequest>,
}

impl NotificationRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an accepted request, replacing any earlier one with the same identifier.
    ///
    /// Returns the replaced request.
    pub fn track(&mut self, request: NotificationRequest) -> Option<NotificationRequest> {
        self.entries.insert(request.identifier.clone(), request)
    }

    /// Stop tracking an identifier. Unknown identifiers are a no-op.
    pub fn forget(&mut self, identifier: &str) -> Option<NotificationRequest> {
        self.entries.remove(identifier)
    }

    /// Look up the tracked request for an identifier
    pub fn get(&self, identifier: &str) -> Option<&NotificationRequest> {
        self.entries.get(identifier)
    }

    /// Tracked identifiers, sorted
    pub fn identifiers(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.entries.keys().cloned().collect();
        ids.sort();
        ids
    }
}
