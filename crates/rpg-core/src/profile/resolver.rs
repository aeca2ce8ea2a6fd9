//! Username extraction and URL validation.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RpgError};

/// Name returned when a URL carries no `/user/<name>` segment.
pub const ANONYMOUS_USER: &str = "Anonymous User";

/// Substring every accepted profile URL must contain.
pub const PROFILE_PATH_MARKER: &str = "reddit.com/user/";

// Literal pattern, compiles unconditionally.
static USERNAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"reddit\.com/user/([^/]+)").expect("username pattern compiles"));

/// A single profile lookup request, created per user action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileQuery {
    /// The URL exactly as the user entered it
    pub url: String,
}

impl ProfileQuery {
    /// Resolves the username this query points at.
    pub fn username(&self) -> String {
        resolve(&self.url)
    }
}

/// Extracts the username from a Reddit profile URL.
///
/// Returns the path segment following `reddit.com/user/` up to the next `/`,
/// verbatim. Case and percent-encoding are left alone. Falls back to
/// [`ANONYMOUS_USER`] when the pattern does not match; this never fails.
pub fn resolve(url: &str) -> String {
    USERNAME_PATTERN
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| ANONYMOUS_USER.to_string())
}

/// Validates raw user input before any processing happens.
///
/// # Errors
///
/// - `InvalidInput` if the input is empty or whitespace-only
/// - `InvalidInput` if the input does not contain [`PROFILE_PATH_MARKER`]
pub fn validate_profile_url(input: &str) -> Result<ProfileQuery> {
    if input.trim().is_empty() {
        return Err(RpgError::invalid_input("Please enter a Reddit profile URL"));
    }

    if !input.contains(PROFILE_PATH_MARKER) {
        return Err(RpgError::invalid_input(
            "Please enter a valid Reddit user profile URL",
        ));
    }

    Ok(ProfileQuery {
        url: input.to_string(),
    })
}
