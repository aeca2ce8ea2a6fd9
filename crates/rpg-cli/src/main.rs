use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "rpg")]
#[command(about = "RPG - Reddit Persona Generator", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to ~/.config/rpg/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a Reddit profile URL and print the persona report
    Analyze(commands::analyze::AnalyzeArgs),
    /// Print the text report for a persona exported as JSON
    Format {
        /// Persona JSON file
        input: PathBuf,
    },
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Print the default config file path
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_service = commands::utils::config_service(cli.config)?;
    commands::utils::init_logging(&config_service);

    match cli.command {
        Commands::Analyze(args) => commands::analyze::run(&config_service, args).await?,
        Commands::Format { input } => commands::format::run(&input)?,
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&config_service)?,
            ConfigAction::Path => commands::config::path()?,
        },
    }

    Ok(())
}
