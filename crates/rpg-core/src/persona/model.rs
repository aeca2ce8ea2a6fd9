//! Persona domain model.
//!
//! A persona is the summary record produced for one analyzed profile:
//! demographics, personality sliders, motivations, free-text lists, a quote,
//! and the citations that tie insights back to the fetched activity.

use serde::{Deserialize, Serialize};

/// Basic demographic guesses for the persona.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Demographics {
    /// Age bracket, e.g. "26-30"
    pub age: String,
    pub occupation: String,
    pub location: String,
    /// Relationship status
    pub status: String,
}

/// Positions on four bipolar personality scales.
///
/// Each value is in `[0, 100]`; lower leans towards the first pole
/// (e.g. 25 on `introvert_extrovert` is more introverted).
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonalityTraits {
    pub introvert_extrovert: u8,
    pub intuition_sensing: u8,
    pub feeling_thinking: u8,
    pub perceiving_judging: u8,
}

impl PersonalityTraits {
    /// Labeled slider values in display order.
    pub fn rows(&self) -> [(&'static str, u8); 4] {
        [
            ("Introvert ←→ Extrovert", self.introvert_extrovert),
            ("Intuition ←→ Sensing", self.intuition_sensing),
            ("Feeling ←→ Thinking", self.feeling_thinking),
            ("Perceiving ←→ Judging", self.perceiving_judging),
        ]
    }
}

/// Motivation strengths as percentages in `[0, 100]`.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Motivations {
    pub convenience: u8,
    pub wellness: u8,
    pub speed: u8,
    pub preferences: u8,
    pub comfort: u8,
    pub needs: u8,
}

impl Motivations {
    /// Labeled percentages in display order.
    pub fn rows(&self) -> [(&'static str, u8); 6] {
        [
            ("Convenience", self.convenience),
            ("Wellness", self.wellness),
            ("Speed", self.speed),
            ("Preferences", self.preferences),
            ("Comfort", self.comfort),
            ("Needs", self.needs),
        ]
    }
}

/// One insight and the excerpts supporting it.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Citation {
    /// Insight label, e.g. "Prefers remote work"
    pub insight: String,
    /// Quoted excerpts, each prefixed with its source community
    pub sources: Vec<String>,
}

/// Insight label → excerpts, kept in insertion order.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Citations(Vec<Citation>);

impl Citations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `source` under `insight`, appending to an existing entry if the
    /// label is already present.
    pub fn push(&mut self, insight: impl Into<String>, source: impl Into<String>) {
        let insight = insight.into();
        match self.0.iter_mut().find(|c| c.insight == insight) {
            Some(existing) => existing.sources.push(source.into()),
            None => self.0.push(Citation {
                insight,
                sources: vec![source.into()],
            }),
        }
    }

    pub fn get(&self, insight: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|c| c.insight == insight)
            .map(|c| c.sources.as_slice())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|c| c.insight.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Citation> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Citations {
    type Item = &'a Citation;
    type IntoIter = std::slice::Iter<'a, Citation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// The synthesized user persona.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    /// Display name derived from the username
    pub name: String,
    pub demographics: Demographics,
    pub personality: PersonalityTraits,
    pub motivations: Motivations,
    /// Behaviors and habits, in display order
    pub behaviors: Vec<String>,
    /// Goals and needs, in display order
    pub goals: Vec<String>,
    pub frustrations: Vec<String>,
    pub quote: String,
    pub citations: Citations,
}
