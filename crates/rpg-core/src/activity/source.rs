//! Activity source trait.

use super::model::ActivityRecord;
use crate::error::Result;

/// Something that can fetch a Reddit user's posts and comments.
///
/// The synthesis and formatting code only ever sees the returned
/// [`ActivityRecord`], so any implementation (simulated, HTTP-backed, or a
/// test double) can be swapped in.
///
/// # Implementation Notes
///
/// Real implementations are expected to fail with
/// `RpgError::ActivityUnavailable` on connectivity problems, rate limiting,
/// or private/nonexistent profiles.
#[async_trait::async_trait]
pub trait ActivitySource: Send + Sync {
    /// Fetches the activity for `username`.
    ///
    /// # Returns
    ///
    /// - `Ok(ActivityRecord)`: The user's posts and comments
    /// - `Err(RpgError)`: Error if the activity could not be retrieved
    async fn fetch(&self, username: &str) -> Result<ActivityRecord>;
}
