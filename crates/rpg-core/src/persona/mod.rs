//! Persona domain module.
//!
//! This module contains the persona record, the synthesizer that builds one
//! from fetched activity, the plain-text report formatter, and the exporter
//! trait used to hand a finished report to storage.
//!
//! # Module Structure
//!
//! - `model`: Core persona domain models (`Persona`, `Demographics`, sliders, `Citations`)
//! - `synthesizer`: Builds a `Persona` from an `ActivityRecord`
//! - `report`: Serializes a `Persona` into the downloadable text report
//! - `exporter`: Trait for persisting a rendered report
//!
//! # Usage
//!
//! ```ignore
//! use rpg_core::persona::{synthesize, format_report, Persona};
//! ```

mod exporter;
mod model;
mod report;
mod synthesizer;

// Re-export public API
pub use exporter::PersonaExporter;
pub use model::{Citation, Citations, Demographics, Motivations, Persona, PersonalityTraits};
pub use report::{
    REPORT_FOOTER, ReportSection, format_report, parse_persona_json, report_file_name,
    validate_persona,
};
pub use synthesizer::{MIN_ACTIVITY_ITEMS, capitalize_first, synthesize};
