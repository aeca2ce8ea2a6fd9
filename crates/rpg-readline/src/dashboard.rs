//! Terminal rendering of a persona and its source activity.

use colored::{ColoredString, Colorize};
use rpg_core::activity::ActivityRecord;
use rpg_core::notification::{Notification, NotificationLevel};
use rpg_core::persona::Persona;

const BAR_WIDTH: usize = 20;

/// Renders the full persona dashboard.
pub fn render_persona(persona: &Persona) -> String {
    let mut out = Vec::new();

    out.push(
        format!("User Persona: {}", persona.name)
            .bright_magenta()
            .bold()
            .to_string(),
    );
    out.push(String::new());

    out.push(heading("Demographics"));
    let d = &persona.demographics;
    for (label, value) in [
        ("Age", &d.age),
        ("Occupation", &d.occupation),
        ("Location", &d.location),
        ("Status", &d.status),
    ] {
        out.push(format!("  {:<12}{}", label.bright_black(), value.bold()));
    }
    out.push(String::new());

    out.push(heading("Key Quote"));
    out.push(format!("  \"{}\"", persona.quote).yellow().italic().to_string());
    out.push(String::new());

    out.push(heading("Personality"));
    for (label, value) in persona.personality.rows() {
        out.push(slider(label, value));
    }
    out.push(String::new());

    out.push(heading("Motivations"));
    for (label, value) in persona.motivations.rows() {
        out.push(slider(label, value));
    }
    out.push(String::new());

    out.push(heading("Behaviors & Habits"));
    out.extend(persona.behaviors.iter().map(|b| bullet(b, "•".green())));
    out.push(String::new());

    out.push(heading("Goals & Needs"));
    out.extend(persona.goals.iter().map(|g| bullet(g, "•".blue())));
    out.push(String::new());

    out.push(heading("Frustrations"));
    out.extend(persona.frustrations.iter().map(|f| bullet(f, "•".red())));
    out.push(String::new());

    out.push(heading("Citations & Sources"));
    for citation in &persona.citations {
        out.push(format!("  {}", citation.insight.bold()));
        for source in &citation.sources {
            out.push(format!("    {} {}", "│".bright_black(), source.bright_black()));
        }
    }

    out.join("\n")
}

/// Renders the fetched posts and comments.
pub fn render_activity(activity: &ActivityRecord) -> String {
    let mut out = vec![heading("Posts")];
    for post in &activity.posts {
        out.push(format!(
            "  {} {} {}",
            format!("r/{}", post.subreddit).bright_cyan(),
            post.title.bold(),
            format!("({} points)", post.score).bright_black()
        ));
        out.push(format!("    {}", post.content));
        out.push(format!("    {}", post.url.bright_black()));
    }

    out.push(String::new());
    out.push(heading("Comments"));
    for comment in &activity.comments {
        out.push(format!(
            "  {} {}",
            format!("r/{}", comment.subreddit).bright_cyan(),
            format!("({} points)", comment.score).bright_black()
        ));
        out.push(format!("    {}", comment.content));
        out.push(format!("    {}", comment.url.bright_black()));
    }

    out.join("\n")
}

/// One colored notification line.
pub fn render_notification(notification: &Notification) -> String {
    let line = match notification.level {
        NotificationLevel::Success => format!("✓ {}", notification.message).bright_green(),
        NotificationLevel::Info => format!("… {}", notification.message).bright_black(),
        NotificationLevel::Warning => format!("! {}", notification.message).yellow(),
        NotificationLevel::Error => format!("✗ {}", notification.message).red(),
    };
    line.to_string()
}

/// A fixed-width bar for a value in `[0, 100]`.
pub fn progress_bar(value: u8) -> String {
    let filled = usize::from(value.min(100)) * BAR_WIDTH / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn heading(title: &str) -> String {
    format!("── {} ──", title).bright_white().bold().to_string()
}

fn slider(label: &str, value: u8) -> String {
    format!(
        "  {:<24}{} {:>3}%",
        label,
        progress_bar(value).bright_cyan(),
        value
    )
}

fn bullet(text: &str, marker: ColoredString) -> String {
    format!("  {} {}", marker, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rpg_core::activity::get_sample_activity;
    use rpg_core::notification::messages;
    use rpg_core::persona::synthesize;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_progress_bar_bounds() {
        assert_eq!(progress_bar(0), "░".repeat(20));
        assert_eq!(progress_bar(100), "█".repeat(20));
        assert_eq!(progress_bar(25), format!("{}{}", "█".repeat(5), "░".repeat(15)));
        assert_eq!(progress_bar(250), "█".repeat(20));
    }

    #[test]
    fn test_dashboard_contains_all_sections() {
        plain();
        let persona = synthesize(&get_sample_activity(), "jane").unwrap();
        let rendered = render_persona(&persona);

        assert!(rendered.starts_with("User Persona: Jane"));
        for title in [
            "Demographics",
            "Key Quote",
            "Personality",
            "Motivations",
            "Behaviors & Habits",
            "Goals & Needs",
            "Frustrations",
            "Citations & Sources",
        ] {
            assert!(rendered.contains(&format!("── {} ──", title)), "{title}");
        }
        assert!(rendered.contains("Introvert ←→ Extrovert"));
        assert!(rendered.contains(" 95%"));
        assert!(rendered.contains(&persona.quote));
    }

    #[test]
    fn test_activity_lists_posts_and_comments() {
        plain();
        let activity = get_sample_activity();
        let rendered = render_activity(&activity);
        assert!(rendered.contains("r/careerguidance"));
        assert!(rendered.contains("(156 points)"));
        assert!(rendered.contains(&activity.posts[1].title));
    }

    #[test]
    fn test_notification_markers() {
        plain();
        assert_eq!(render_notification(&Notification::error("nope")), "✗ nope");
        assert_eq!(render_notification(&Notification::success("done")), "✓ done");
        assert_eq!(
            render_notification(&Notification::info(messages::ANALYZING_ACTIVITY)),
            "… Analyzing Reddit activity..."
        );
    }
}
