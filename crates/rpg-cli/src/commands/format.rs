use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rpg_core::persona::{format_report, parse_persona_json};

pub fn run(input: &Path) -> Result<()> {
    let json = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let persona = parse_persona_json(&json)
        .with_context(|| format!("{} is not a valid persona", input.display()))?;
    println!("{}", format_report(&persona)?);
    Ok(())
}
