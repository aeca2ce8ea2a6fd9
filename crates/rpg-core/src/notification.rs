//! User-facing notifications.
//!
//! Short, transient messages emitted by the request flow (toasts in a
//! graphical front end, colored lines in the terminal).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;

/// Severity of a notification.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NotificationLevel {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            created_at: Utc::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, message)
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}

/// Canonical notification texts.
pub mod messages {
    pub const ANALYSIS_SUCCEEDED: &str = "Persona generated successfully!";
    pub const ANALYSIS_FAILED: &str = "Failed to analyze profile. Please try again.";
    pub const ANALYSIS_IN_PROGRESS: &str = "An analysis is already in progress";
    pub const DOWNLOAD_SUCCEEDED: &str = "Persona downloaded successfully!";
    pub const NOTHING_TO_DOWNLOAD: &str = "Generate a persona before downloading";
    /// Loading cue shown while a request is pending.
    pub const ANALYZING_ACTIVITY: &str = "Analyzing Reddit activity...";

    pub fn analyzing(username: &str) -> String {
        format!("Analyzing profile: {}", username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_display() {
        assert_eq!(NotificationLevel::Warning.to_string(), "warning");
        assert_eq!(NotificationLevel::Success.to_string(), "success");
    }

    #[test]
    fn test_constructors() {
        let n = Notification::error(messages::ANALYSIS_FAILED);
        assert!(n.is_error());
        assert_eq!(n.message, "Failed to analyze profile. Please try again.");
        assert_eq!(messages::analyzing("spez"), "Analyzing profile: spez");
    }
}
