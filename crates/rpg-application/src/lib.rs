//! Application layer for the persona generator.
//!
//! Coordinates the domain transforms with an activity source and an
//! exporter to run one analysis request at a time.

pub mod persona_generator;

pub use persona_generator::PersonaGenerator;
