//! Error types for the persona generator.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire persona generator.
///
/// Variants are grouped by where they surface: input validation at the
/// request boundary, the analysis flow (fetch + synthesis), and the report
/// formatter's own preconditions. Conversions from the common I/O and
/// serialization errors are provided via `From`.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RpgError {
    /// The profile URL was empty or not a Reddit user profile URL
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Any failure raised while fetching activity or synthesizing a persona
    #[error("Analysis failed: {0}")]
    AnalysisFailure(String),

    /// A persona record is missing required content
    #[error("Malformed persona: {0}")]
    MalformedPersona(String),

    /// The activity record is too short for the fixed citation lookups
    #[error(
        "Insufficient activity: need at least {required} posts and {required} comments, got {posts} posts and {comments} comments"
    )]
    InsufficientActivity {
        posts: usize,
        comments: usize,
        required: usize,
    },

    /// The activity source could not provide data (network, rate limit, private profile)
    #[error("Activity unavailable: {0}")]
    ActivityUnavailable(String),

    /// A second analysis was requested while one is still outstanding
    #[error("An analysis is already in progress")]
    AnalysisInProgress,

    /// Download requested before any persona was generated
    #[error("No persona has been generated yet")]
    NoPersona,

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RpgError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an InvalidInput error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Creates an AnalysisFailure error
    pub fn analysis_failure(message: impl Into<String>) -> Self {
        Self::AnalysisFailure(message.into())
    }

    /// Creates a MalformedPersona error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedPersona(message.into())
    }

    /// Creates an ActivityUnavailable error
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::ActivityUnavailable(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is an InvalidInput error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Check if this is an AnalysisFailure error
    pub fn is_analysis_failure(&self) -> bool {
        matches!(self, Self::AnalysisFailure(_))
    }

    /// Check if this is a MalformedPersona error
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedPersona(_))
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Check if this is an IO error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for RpgError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for RpgError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for RpgError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for RpgError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// Conversion from anyhow::Error, used by front ends that box their own errors
impl From<anyhow::Error> for RpgError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// A type alias for `Result<T, RpgError>`.
pub type Result<T> = std::result::Result<T, RpgError>;
