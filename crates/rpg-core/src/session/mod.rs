//! Request lifecycle state.
//!
//! # Module Structure
//!
//! - `model`: [`AnalysisState`] and the [`AnalysisPhase`] it moves through

mod model;

pub use model::{AnalysisPhase, AnalysisState};
