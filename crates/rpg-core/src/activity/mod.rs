//! Reddit activity domain module.
//!
//! # Module Structure
//!
//! - `model`: Posts, comments and the [`ActivityRecord`] that bundles them
//! - `source`: Trait for anything that can fetch a user's activity
//! - `sample`: The fixed dataset served by the simulated source

mod model;
mod sample;
mod source;

// Re-export public API
pub use model::{ActivityRecord, RedditComment, RedditPost};
pub use sample::get_sample_activity;
pub use source::ActivitySource;
