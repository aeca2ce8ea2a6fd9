use anyhow::{Context, Result};
use rpg_infrastructure::{ConfigService, RpgPaths};

pub fn show(config_service: &ConfigService) -> Result<()> {
    let config = config_service
        .get_config()
        .with_context(|| format!("Failed to load {}", config_service.path().display()))?;
    let rendered = toml::to_string_pretty(&config).context("Failed to render config as TOML")?;
    print!("{}", rendered);
    Ok(())
}

/// Prints the default config location; `--config` does not change it.
pub fn path() -> Result<()> {
    let path = RpgPaths::config_file().context("Failed to resolve the default config path")?;
    println!("{}", path.display());
    Ok(())
}
