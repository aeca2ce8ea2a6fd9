use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use rpg_application::PersonaGenerator;
use rpg_core::notification::{Notification, NotificationLevel};
use rpg_infrastructure::{ConfigService, FilePersonaExporter, MockRedditSource};
use tokio::sync::mpsc;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Reddit profile URL, e.g. https://www.reddit.com/user/spez/
    pub url: String,

    /// Also write <Name>_persona.txt
    #[arg(long)]
    pub download: bool,

    /// Directory for --download (overrides export.output_dir)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Print the persona as JSON instead of the text report
    #[arg(long)]
    pub json: bool,

    /// Simulated fetch latency in milliseconds (overrides fetch.delay_ms)
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

pub async fn run(config_service: &ConfigService, args: AnalyzeArgs) -> Result<()> {
    let config = config_service
        .get_config()
        .with_context(|| format!("Failed to load {}", config_service.path().display()))?;

    let delay = args
        .delay_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.fetch.delay());
    let output_dir = args.output_dir.unwrap_or(config.export.output_dir);

    let (tx, mut rx) = mpsc::unbounded_channel::<Notification>();
    let printer = tokio::spawn(async move {
        while let Some(notification) = rx.recv().await {
            eprintln!("{}", render(&notification));
        }
    });

    let generator = PersonaGenerator::new(
        Arc::new(MockRedditSource::new(delay)),
        Arc::new(FilePersonaExporter::new(output_dir)),
        tx,
    );

    let outcome = execute(&generator, &args.url, args.json, args.download).await;

    // Closing the channel lets the printer drain and exit.
    drop(generator);
    let _ = printer.await;

    outcome
}

async fn execute(
    generator: &PersonaGenerator,
    url: &str,
    json: bool,
    download: bool,
) -> Result<()> {
    let persona = generator.analyze(url).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&persona)?);
    } else {
        println!("{}", generator.report().await?);
    }

    if download {
        let path = generator.download().await?;
        eprintln!("Saved {}", path.display());
    }

    Ok(())
}

fn render(notification: &Notification) -> String {
    let tag = match notification.level {
        NotificationLevel::Success => "ok",
        NotificationLevel::Info => "info",
        NotificationLevel::Warning => "warn",
        NotificationLevel::Error => "error",
    };
    format!("[{}] {}", tag, notification.message)
}
