//! Persona synthesis.
//!
//! Builds a [`Persona`] from a fetched [`ActivityRecord`]. Every slider,
//! demographic and list entry is a fixed value; only the name and the four
//! citation excerpts depend on the inputs.

use super::model::{Citations, Demographics, Motivations, Persona, PersonalityTraits};
use crate::activity::{ActivityRecord, RedditComment, RedditPost};
use crate::error::{Result, RpgError};
use crate::profile::ANONYMOUS_USER;

/// Minimum number of posts and of comments a record must hold.
pub const MIN_ACTIVITY_ITEMS: usize = 2;

/// Builds the persona for `username` from `data`.
///
/// Citation mapping, in order:
///
/// | insight | excerpt |
/// |---|---|
/// | Prefers remote work | `comments[0]` |
/// | Values work-life balance | `posts[0]` |
/// | Introverted personality | `comments[1]` |
/// | Seeks quiet environments | `posts[1]` |
///
/// An empty `username` is named [`ANONYMOUS_USER`], so every persona built
/// here passes [`validate_persona`](super::validate_persona).
///
/// # Errors
///
/// Returns `InsufficientActivity` if `data` holds fewer than
/// [`MIN_ACTIVITY_ITEMS`] posts or comments. No partial persona is produced.
pub fn synthesize(data: &ActivityRecord, username: &str) -> Result<Persona> {
    let (first_post, second_post, first_comment, second_comment) =
        match (data.posts.as_slice(), data.comments.as_slice()) {
            ([p0, p1, ..], [c0, c1, ..]) => (p0, p1, c0, c1),
            _ => {
                return Err(RpgError::InsufficientActivity {
                    posts: data.posts.len(),
                    comments: data.comments.len(),
                    required: MIN_ACTIVITY_ITEMS,
                });
            }
        };

    let mut citations = Citations::new();
    citations.push("Prefers remote work", comment_excerpt(first_comment));
    citations.push("Values work-life balance", post_excerpt(first_post));
    citations.push("Introverted personality", comment_excerpt(second_comment));
    citations.push("Seeks quiet environments", post_excerpt(second_post));

    Ok(Persona {
        name: display_name(username),
        demographics: Demographics {
            age: "26-30".to_string(),
            occupation: "Software Engineer".to_string(),
            location: "Urban Area".to_string(),
            status: "Single".to_string(),
        },
        personality: PersonalityTraits {
            introvert_extrovert: 25, // more introverted
            intuition_sensing: 70,   // more intuitive
            feeling_thinking: 45,    // balanced
            perceiving_judging: 60,  // more judging
        },
        motivations: Motivations {
            convenience: 85,
            wellness: 70,
            speed: 60,
            preferences: 90,
            comfort: 95,
            needs: 75,
        },
        behaviors: to_strings(&[
            "Prefers remote work environments for better focus and control",
            "Values work-life balance and collaborative company culture",
            "Seeks out quiet, comfortable spaces for productivity",
            "Actively researches and plans career development",
        ]),
        goals: to_strings(&[
            "Maintain a healthy work-life balance while advancing career",
            "Find optimal work environments that support productivity",
            "Build professional network in the tech industry",
            "Continuously learn and grow technical skills",
        ]),
        frustrations: to_strings(&[
            "Large group meetings and noisy work environments",
            "Unclear communication and lack of structure",
            "Limited control over work environment in traditional offices",
            "Difficulty finding suitable remote work locations",
        ]),
        quote: "I work best when I can control my environment and have the flexibility to work in a way that suits my personality.".to_string(),
        citations,
    })
}

/// Uppercases the first character and leaves the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn display_name(username: &str) -> String {
    if username.is_empty() {
        ANONYMOUS_USER.to_string()
    } else {
        capitalize_first(username)
    }
}

fn post_excerpt(post: &RedditPost) -> String {
    format!("r/{} post: \"{}\"", post.subreddit, post.content)
}

fn comment_excerpt(comment: &RedditComment) -> String {
    format!("r/{} comment: \"{}\"", comment.subreddit, comment.content)
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::get_sample_activity;

    #[test]
    fn test_name_capitalizes_first_letter_only() {
        let data = get_sample_activity();
        assert_eq!(synthesize(&data, "alice").unwrap().name, "Alice");
        assert_eq!(synthesize(&data, "ALICE").unwrap().name, "ALICE");
        assert_eq!(synthesize(&data, "aLiCe").unwrap().name, "ALiCe");
    }

    #[test]
    fn test_name_keeps_unusual_usernames() {
        let data = get_sample_activity();
        assert_eq!(synthesize(&data, " ").unwrap().name, " ");
        assert_eq!(synthesize(&data, "?x=1").unwrap().name, "?x=1");
        assert_eq!(synthesize(&data, "ß").unwrap().name, "SS");
        assert_eq!(synthesize(&data, "").unwrap().name, ANONYMOUS_USER);
    }

    #[test]
    fn test_capitalize_first_edge_cases() {
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("ß"), "SS");
        assert_eq!(capitalize_first("1abc"), "1abc");
    }

    #[test]
    fn test_synthesize_is_idempotent() {
        let data = get_sample_activity();
        let first = synthesize(&data, "bob").unwrap();
        let second = synthesize(&data, "bob").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_citation_keys_in_order() {
        let persona = synthesize(&get_sample_activity(), "bob").unwrap();
        let labels: Vec<&str> = persona.citations.labels().collect();
        assert_eq!(
            labels,
            vec![
                "Prefers remote work",
                "Values work-life balance",
                "Introverted personality",
                "Seeks quiet environments",
            ]
        );
    }

    #[test]
    fn test_citation_excerpts_come_from_matching_records() {
        let data = get_sample_activity();
        let persona = synthesize(&data, "bob").unwrap();

        let expected = [
            ("Prefers remote work", &data.comments[0].content),
            ("Values work-life balance", &data.posts[0].content),
            ("Introverted personality", &data.comments[1].content),
            ("Seeks quiet environments", &data.posts[1].content),
        ];
        for (label, content) in expected {
            let sources = persona.citations.get(label).unwrap();
            assert_eq!(sources.len(), 1);
            assert!(sources[0].contains(content.as_str()), "{label}");
        }
        assert_eq!(
            persona.citations.get("Prefers remote work").unwrap()[0],
            format!("r/productivity comment: \"{}\"", data.comments[0].content)
        );
    }

    #[test]
    fn test_constants_do_not_depend_on_data() {
        let persona = synthesize(&get_sample_activity(), "bob").unwrap();
        assert_eq!(persona.personality.introvert_extrovert, 25);
        assert_eq!(persona.personality.perceiving_judging, 60);
        assert_eq!(persona.motivations.comfort, 95);
        assert_eq!(persona.demographics.age, "26-30");
        assert_eq!(persona.behaviors.len(), 4);
        assert_eq!(persona.goals.len(), 4);
        assert_eq!(persona.frustrations.len(), 4);
    }

    #[test]
    fn test_rejects_short_comment_list() {
        let mut data = get_sample_activity();
        data.comments.truncate(1);

        let err = synthesize(&data, "bob").unwrap_err();
        assert_eq!(
            err,
            RpgError::InsufficientActivity {
                posts: 2,
                comments: 1,
                required: MIN_ACTIVITY_ITEMS,
            }
        );
    }

    #[test]
    fn test_rejects_empty_record() {
        let err = synthesize(&ActivityRecord::default(), "bob").unwrap_err();
        assert!(matches!(err, RpgError::InsufficientActivity { posts: 0, .. }));
    }

    #[test]
    fn test_extra_items_are_ignored() {
        let mut data = get_sample_activity();
        data.posts.push(data.posts[0].clone());
        data.comments.push(data.comments[1].clone());

        let persona = synthesize(&data, "bob").unwrap();
        assert_eq!(persona.citations.len(), 4);
    }
}
