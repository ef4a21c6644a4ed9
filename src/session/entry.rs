//! Session log entry data structures
//!
//! Defines the structure of session log entries: the lifecycle events of
//! one wizard run, correlated by a per-run session id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier correlating all log entries of one wizard run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Create a new random session id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a session id from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ses-{}", &self.0.to_string()[..8])
    }
}

/// Lifecycle events recorded for a wizard run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionEvent {
    /// Step-one data was captured
    StepOneCaptured,
    /// A recognition job was started for an attached image
    RecognitionStarted,
    /// Recognition finished and produced an overlay
    RecognitionSucceeded,
    /// Recognition failed; the wizard stays on step one
    RecognitionFailed,
    /// The user retried after a recognition failure
    RecognitionRetried,
    /// An assembled receipt was handed to the sink
    ReceiptDispatched,
}

impl fmt::Display for SessionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StepOneCaptured => write!(f, "STEP ONE CAPTURED"),
            Self::RecognitionStarted => write!(f, "RECOGNITION STARTED"),
            Self::RecognitionSucceeded => write!(f, "RECOGNITION SUCCEEDED"),
            Self::RecognitionFailed => write!(f, "RECOGNITION FAILED"),
            Self::RecognitionRetried => write!(f, "RECOGNITION RETRIED"),
            Self::ReceiptDispatched => write!(f, "RECEIPT DISPATCHED"),
        }
    }
}

/// A single session log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionEntry {
    /// When the event occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// The wizard run this entry belongs to
    pub session_id: SessionId,

    /// What happened
    pub event: SessionEvent,

    /// Short human-readable detail (e.g. an error message or image path)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// JSON payload for events that carry data (e.g. the dispatched record)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

impl SessionEntry {
    /// Create an entry for an event with no extra data
    pub fn new(session_id: SessionId, event: SessionEvent) -> Self {
        Self {
            timestamp: Utc::now(),
            session_id,
            event,
            detail: None,
            payload: None,
        }
    }

    /// Attach a human-readable detail
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Attach a serializable payload
    pub fn with_payload<T: Serialize>(mut self, payload: &T) -> Self {
        self.payload = serde_json::to_value(payload).ok();
        self
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.session_id,
            self.event
        );

        if let Some(detail) = &self.detail {
            output.push_str(&format!(" ({})", detail));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_session_id_display() {
        let id = SessionId::new();
        let display = format!("{}", id);
        assert!(display.starts_with("ses-"));
        assert_eq!(display.len(), 12); // "ses-" + 8 chars
    }

    #[test]
    fn test_event_display() {
        assert_eq!(
            SessionEvent::RecognitionFailed.to_string(),
            "RECOGNITION FAILED"
        );
        assert_eq!(
            SessionEvent::ReceiptDispatched.to_string(),
            "RECEIPT DISPATCHED"
        );
    }

    #[test]
    fn test_entry_with_payload() {
        let entry = SessionEntry::new(SessionId::new(), SessionEvent::ReceiptDispatched)
            .with_payload(&json!({"items": 2}));

        assert!(entry.payload.is_some());
        assert!(entry.detail.is_none());
    }

    #[test]
    fn test_entry_serialization() {
        let entry = SessionEntry::new(SessionId::new(), SessionEvent::StepOneCaptured)
            .with_detail("Market St");

        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: SessionEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.event, SessionEvent::StepOneCaptured);
        assert_eq!(deserialized.detail, Some("Market St".to_string()));
    }

    #[test]
    fn test_human_readable_format() {
        let entry = SessionEntry::new(SessionId::new(), SessionEvent::RecognitionFailed)
            .with_detail("tesseract exited with status 1");

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("RECOGNITION FAILED"));
        assert!(formatted.contains("tesseract exited with status 1"));
    }
}
