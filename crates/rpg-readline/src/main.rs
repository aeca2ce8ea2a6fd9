use std::borrow::Cow::{self, Borrowed, Owned};
use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use rustyline::Editor;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use tokio::sync::mpsc;

use rpg_application::PersonaGenerator;
use rpg_core::notification::{Notification, messages};
use rpg_core::profile::validate_profile_url;
use rpg_infrastructure::{ConfigService, FilePersonaExporter, MockRedditSource, logging};

mod dashboard;

const COMMANDS: [&str; 7] = [
    "/analyze", "/show", "/activity", "/download", "/json", "/status", "/help",
];

/// REPL helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct ReplHelper {
    commands: Vec<String>,
}

impl ReplHelper {
    fn new() -> Self {
        Self {
            commands: COMMANDS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Helper for ReplHelper {}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for ReplHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for ReplHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for ReplHelper {}

/// A parsed line of REPL input.
#[derive(Debug, PartialEq, Eq)]
enum ReplCommand {
    Analyze(String),
    Show,
    Activity,
    Download,
    Json,
    Status,
    Help,
    Unknown(String),
}

impl ReplCommand {
    /// Bare URLs are treated as `/analyze <url>`.
    fn parse(line: &str) -> Self {
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };

        match head {
            "/analyze" => Self::Analyze(rest.to_string()),
            "/show" => Self::Show,
            "/activity" => Self::Activity,
            "/download" => Self::Download,
            "/json" => Self::Json,
            "/status" => Self::Status,
            "/help" => Self::Help,
            _ if !line.starts_with('/') => Self::Analyze(line.to_string()),
            _ => Self::Unknown(head.to_string()),
        }
    }
}

fn print_help() {
    println!("{}", "Commands:".bright_white().bold());
    println!("  /analyze <url>  Analyze a Reddit profile (or just paste the URL)");
    println!("  /show           Show the current persona");
    println!("  /activity       Show the fetched posts and comments");
    println!("  /download       Save <Name>_persona.txt");
    println!("  /json           Print the persona as JSON");
    println!("  /status         Show the request state");
    println!("  quit            Exit");
}

/// The main entry point for the persona generator REPL.
///
/// Analyses run on spawned tasks so the prompt stays responsive; the
/// generator rejects a new `/analyze` while one is still pending.
/// Notifications are printed by a dedicated task as they arrive.
#[tokio::main]
async fn main() -> Result<()> {
    // ===== Backend Initialization =====
    let config = ConfigService::new()?.get_config()?;
    logging::init(&config.logging.level);

    let (notification_tx, mut notification_rx) = mpsc::unbounded_channel::<Notification>();
    let generator = Arc::new(PersonaGenerator::new(
        Arc::new(MockRedditSource::from_settings(&config.fetch)),
        Arc::new(FilePersonaExporter::new(config.export.output_dir.clone())),
        notification_tx,
    ));

    let notification_printer = tokio::spawn(async move {
        while let Some(notification) = notification_rx.recv().await {
            println!("{}", dashboard::render_notification(&notification));
        }
    });

    // ===== REPL Setup =====
    let mut rl: Editor<ReplHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(ReplHelper::new()));

    println!("{}", "=== Reddit Persona Generator ===".bright_magenta().bold());
    println!(
        "{}",
        "Paste a profile URL like https://www.reddit.com/user/username/, '/help' for commands, or 'quit' to exit."
            .bright_black()
    );
    println!();

    // ===== Main REPL Loop =====
    loop {
        let readline = rl.readline(">> ");

        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }

                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                match ReplCommand::parse(trimmed) {
                    ReplCommand::Analyze(url) => {
                        if validate_profile_url(&url).is_ok() && !generator.is_loading().await {
                            println!(
                                "{}",
                                dashboard::render_notification(&Notification::info(
                                    messages::ANALYZING_ACTIVITY
                                ))
                            );
                        }
                        let generator = Arc::clone(&generator);
                        tokio::spawn(async move {
                            // Failures are already reported as notifications.
                            if let Ok(persona) = generator.analyze(&url).await {
                                println!("{}", dashboard::render_persona(&persona));
                            }
                        });
                    }
                    ReplCommand::Show => match generator.persona().await {
                        Some(persona) => println!("{}", dashboard::render_persona(&persona)),
                        None => println!("{}", "No persona yet.".bright_black()),
                    },
                    ReplCommand::Activity => match generator.activity().await {
                        Some(activity) => println!("{}", dashboard::render_activity(&activity)),
                        None => println!("{}", "No activity fetched yet.".bright_black()),
                    },
                    ReplCommand::Download => {
                        if let Ok(path) = generator.download().await {
                            println!("{}", format!("Saved {}", path.display()).bright_black());
                        }
                    }
                    ReplCommand::Json => match generator.persona().await {
                        Some(persona) => match serde_json::to_string_pretty(&persona) {
                            Ok(json) => println!("{}", json),
                            Err(e) => eprintln!("{}", format!("Error: {}", e).red()),
                        },
                        None => println!("{}", "No persona yet.".bright_black()),
                    },
                    ReplCommand::Status => {
                        let state = generator.snapshot().await;
                        println!(
                            "{}",
                            format!("phase: {:?}, url: {:?}", state.phase, state.url).bright_black()
                        );
                    }
                    ReplCommand::Help => print_help(),
                    ReplCommand::Unknown(cmd) => {
                        println!("{}", format!("Unknown command: {}", cmd).bright_black());
                    }
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    // Dropping the last generator handle closes the notification channel.
    drop(generator);
    notification_printer.abort();

    Ok(())
}
