//! Plain-text persona report.
//!
//! The report is one-way: it is meant for humans and is not parsed back.
//! Personas that need to round-trip go through JSON instead
//! (see [`parse_persona_json`]).

use strum::{Display, EnumIter, IntoEnumIterator};

use super::model::Persona;
use crate::error::{Result, RpgError};

/// Last line of every report.
pub const REPORT_FOOTER: &str = "Generated by Reddit Persona Generator";

/// Report sections, in the order they are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum ReportSection {
    #[strum(to_string = "DEMOGRAPHICS")]
    Demographics,
    #[strum(to_string = "PERSONALITY TRAITS")]
    Personality,
    #[strum(to_string = "MOTIVATIONS")]
    Motivations,
    #[strum(to_string = "BEHAVIORS & HABITS")]
    Behaviors,
    #[strum(to_string = "GOALS & NEEDS")]
    Goals,
    #[strum(to_string = "FRUSTRATIONS")]
    Frustrations,
    #[strum(to_string = "KEY QUOTE")]
    Quote,
    #[strum(to_string = "CITATIONS")]
    Citations,
}

impl ReportSection {
    /// The `=== NAME ===` line that opens the section.
    pub fn header(&self) -> String {
        format!("=== {} ===", self)
    }

    fn body(&self, persona: &Persona) -> String {
        match self {
            Self::Demographics => {
                let d = &persona.demographics;
                format!(
                    "Age: {}\nOccupation: {}\nLocation: {}\nStatus: {}",
                    d.age, d.occupation, d.location, d.status
                )
            }
            Self::Personality => percent_lines(&persona.personality.rows()),
            Self::Motivations => percent_lines(&persona.motivations.rows()),
            Self::Behaviors => bullets(&persona.behaviors),
            Self::Goals => bullets(&persona.goals),
            Self::Frustrations => bullets(&persona.frustrations),
            Self::Quote => format!("\"{}\"", persona.quote),
            Self::Citations => persona
                .citations
                .iter()
                .map(|citation| {
                    let sources = citation
                        .sources
                        .iter()
                        .map(|source| format!("  - {}", source))
                        .collect::<Vec<_>>()
                        .join("\n");
                    format!("{}:\n{}", citation.insight, sources)
                })
                .collect::<Vec<_>>()
                .join("\n\n"),
        }
    }
}

/// Renders the downloadable text report.
///
/// # Errors
///
/// Returns `MalformedPersona` if the persona fails [`validate_persona`].
pub fn format_report(persona: &Persona) -> Result<String> {
    validate_persona(persona)?;

    let mut blocks = vec![format!("REDDIT USER PERSONA: {}", persona.name)];
    for section in ReportSection::iter() {
        blocks.push(format!("{}\n{}", section.header(), section.body(persona)));
    }
    blocks.push(REPORT_FOOTER.to_string());

    Ok(blocks.join("\n\n").trim().to_string())
}

/// Checks that every field the report needs is present.
///
/// A persona with an empty name, a blank demographic field or quote, an empty
/// list section, an empty citation, or a slider above 100 is rejected.
///
/// The name is the resolved username and is taken verbatim, so a
/// whitespace-only name is still a name.
pub fn validate_persona(persona: &Persona) -> Result<()> {
    if persona.name.is_empty() {
        return Err(RpgError::malformed("name is empty"));
    }

    let required_text = [
        ("demographics.age", &persona.demographics.age),
        ("demographics.occupation", &persona.demographics.occupation),
        ("demographics.location", &persona.demographics.location),
        ("demographics.status", &persona.demographics.status),
        ("quote", &persona.quote),
    ];
    for (field, value) in required_text {
        if value.trim().is_empty() {
            return Err(RpgError::malformed(format!("{} is empty", field)));
        }
    }

    let required_lists = [
        ("behaviors", &persona.behaviors),
        ("goals", &persona.goals),
        ("frustrations", &persona.frustrations),
    ];
    for (field, values) in required_lists {
        if values.is_empty() {
            return Err(RpgError::malformed(format!("{} has no entries", field)));
        }
    }

    let sliders = persona
        .personality
        .rows()
        .into_iter()
        .chain(persona.motivations.rows());
    for (label, value) in sliders {
        if value > 100 {
            return Err(RpgError::malformed(format!(
                "{} is {}, expected 0-100",
                label, value
            )));
        }
    }

    if persona.citations.is_empty() {
        return Err(RpgError::malformed("citations has no entries"));
    }
    if let Some(citation) = persona.citations.iter().find(|c| c.sources.is_empty()) {
        return Err(RpgError::malformed(format!(
            "citation '{}' has no sources",
            citation.insight
        )));
    }

    Ok(())
}

/// Parses a persona previously exported as JSON.
///
/// Missing or ill-typed fields are reported as `MalformedPersona`, as is a
/// document that parses but fails [`validate_persona`].
pub fn parse_persona_json(json: &str) -> Result<Persona> {
    let persona: Persona =
        serde_json::from_str(json).map_err(|e| RpgError::malformed(e.to_string()))?;
    validate_persona(&persona)?;
    Ok(persona)
}

/// File name for a downloaded report: `<name>_persona.txt`.
///
/// Path separators in the name are replaced so the file always lands in the
/// chosen directory.
pub fn report_file_name(persona: &Persona) -> String {
    let safe_name: String = persona
        .name
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("{}_persona.txt", safe_name)
}

fn bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("• {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

fn percent_lines(rows: &[(&str, u8)]) -> String {
    rows.iter()
        .map(|(label, value)| format!("{}: {}%", label, value))
        .collect::<Vec<_>>()
        .join("\n")
}
