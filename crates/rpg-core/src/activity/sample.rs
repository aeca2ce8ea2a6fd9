//! Fixed activity dataset.
//!
//! Served by the simulated source for every profile.

use super::model::{ActivityRecord, RedditComment, RedditPost};

/// Returns the two posts and two comments the simulated source hands out.
pub fn get_sample_activity() -> ActivityRecord {
    ActivityRecord {
        posts: vec![
            RedditPost {
                title: "Finally got my dream job in tech!".to_string(),
                content: "After months of studying and applying, I landed a software engineering role at a startup. The work-life balance is amazing and I love the collaborative culture.".to_string(),
                subreddit: "careerguidance".to_string(),
                score: 245,
                url: "https://reddit.com/r/careerguidance/post1".to_string(),
            },
            RedditPost {
                title: "Best coffee shops for remote work?".to_string(),
                content: "I work remotely most days and looking for good spots with reliable wifi and comfortable seating. Prefer places that aren't too noisy.".to_string(),
                subreddit: "digitalnomad".to_string(),
                score: 89,
                url: "https://reddit.com/r/digitalnomad/post2".to_string(),
            },
        ],
        comments: vec![
            RedditComment {
                content: "I prefer working from home because I can control my environment better. Less distractions and I can set up my workspace exactly how I like it.".to_string(),
                subreddit: "productivity".to_string(),
                score: 156,
                url: "https://reddit.com/r/productivity/comment1".to_string(),
            },
            RedditComment {
                content: "As an introvert, I find large team meetings exhausting. I much prefer one-on-one discussions or async communication.".to_string(),
                subreddit: "introvert".to_string(),
                score: 78,
                url: "https://reddit.com/r/introvert/comment2".to_string(),
            },
        ],
    }
}
