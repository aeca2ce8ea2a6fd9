//! Activity domain model.
//!
//! Represents what was fetched for a profile: an ordered list of posts and an
//! ordered list of comments, each tagged with the subreddit it came from.

use serde::{Deserialize, Serialize};

/// A submission authored by the profile owner.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RedditPost {
    pub title: String,
    pub content: String,
    /// Community name without the `r/` prefix
    pub subreddit: String,
    pub score: i64,
    pub url: String,
}

/// A comment authored by the profile owner.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RedditComment {
    pub content: String,
    /// Community name without the `r/` prefix
    pub subreddit: String,
    pub score: i64,
    pub url: String,
}

/// Everything fetched for one profile.
///
/// No ordering or uniqueness invariant is enforced; consumers that index into
/// the sequences must check lengths themselves.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityRecord {
    pub posts: Vec<RedditPost>,
    pub comments: Vec<RedditComment>,
}

impl ActivityRecord {
    /// True if neither posts nor comments were fetched.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty() && self.comments.is_empty()
    }

    /// Sum of scores across posts and comments.
    pub fn total_score(&self) -> i64 {
        let posts: i64 = self.posts.iter().map(|p| p.score).sum();
        let comments: i64 = self.comments.iter().map(|c| c.score).sum();
        posts + comments
    }
}
