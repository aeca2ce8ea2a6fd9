//! Analysis state model.

use serde::{Deserialize, Serialize};

use crate::activity::ActivityRecord;
use crate::persona::Persona;

/// Where the current request is in its lifecycle.
///
/// `Idle → Resolving → Fetching → Synthesizing → Displaying`. A failure
/// returns to `Displaying` if an earlier persona is still shown, otherwise
/// to `Idle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisPhase {
    #[default]
    Idle,
    Resolving,
    Fetching,
    Synthesizing,
    Displaying,
}

impl AnalysisPhase {
    /// True while a request is outstanding.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Resolving | Self::Fetching | Self::Synthesizing)
    }
}

/// The view state of the generator: input text, loading phase, and the
/// latest result.
///
/// Owned by a single request handler; nothing else mutates it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisState {
    /// URL of the latest accepted request
    pub url: String,
    pub phase: AnalysisPhase,
    /// Activity behind the displayed persona
    pub activity: Option<ActivityRecord>,
    pub persona: Option<Persona>,
}

impl AnalysisState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.phase.is_pending()
    }

    /// Phase to fall back to once a request ends without a new persona.
    pub fn settled_phase(&self) -> AnalysisPhase {
        if self.persona.is_some() {
            AnalysisPhase::Displaying
        } else {
            AnalysisPhase::Idle
        }
    }
}
