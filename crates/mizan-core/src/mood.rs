//! Mood symbols and their numeric valence
//!
//! Moods form a closed enumeration, each mapped to a valence in [0, 1].
//! The mapping is total at the boundaries that read persisted data:
//! an unknown symbol scores as [`NEUTRAL_VALENCE`], never as an error.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Valence used for any symbol outside the known mood table
pub const NEUTRAL_VALENCE: f64 = 0.5;

/// How the user felt today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    /// 😊 - valence 1.0
    Radiant,
    /// 😐 - valence 0.5
    Neutral,
    /// 😤 - valence 0.25
    Frustrated,
    /// 😭 - valence 0.0
    Tearful,
    /// 🧘 - valence 0.9
    Serene,
}

impl Mood {
    /// All moods, in the order they are offered at check-in
    pub const ALL: [Mood; 5] = [
        Mood::Radiant,
        Mood::Neutral,
        Mood::Frustrated,
        Mood::Tearful,
        Mood::Serene,
    ];

    /// The emoji symbol recorded in the journal
    pub fn symbol(self) -> &'static str {
        match self {
            Mood::Radiant => "😊",
            Mood::Neutral => "😐",
            Mood::Frustrated => "😤",
            Mood::Tearful => "😭",
            Mood::Serene => "🧘",
        }
    }

    /// ASCII name, accepted as check-in input
    pub fn name(self) -> &'static str {
        match self {
            Mood::Radiant => "radiant",
            Mood::Neutral => "neutral",
            Mood::Frustrated => "frustrated",
            Mood::Tearful => "tearful",
            Mood::Serene => "serene",
        }
    }

    /// Numeric valence in [0, 1]
    pub fn valence(self) -> f64 {
        match self {
            Mood::Radiant => 1.0,
            Mood::Neutral => 0.5,
            Mood::Frustrated => 0.25,
            Mood::Tearful => 0.0,
            Mood::Serene => 0.9,
        }
    }

    /// Whether this mood triggers emotional-booster recommendations
    ///
    /// Exactly the two lowest-valence moods qualify.
    pub fn is_negative(self) -> bool {
        matches!(self, Mood::Tearful | Mood::Frustrated)
    }

    /// Parse an emoji symbol or ASCII name
    pub fn from_symbol(input: &str) -> Option<Mood> {
        let trimmed = input.trim();
        Mood::ALL
            .into_iter()
            .find(|m| m.symbol() == trimmed || m.name().eq_ignore_ascii_case(trimmed))
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Error for strict mood parsing at the input boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown mood '{0}' (expected one of: radiant, neutral, frustrated, tearful, serene)")]
pub struct ParseMoodError(String);

impl FromStr for Mood {
    type Err = ParseMoodError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Mood::from_symbol(s).ok_or_else(|| ParseMoodError(s.to_string()))
    }
}

/// Total valence lookup for persisted mood symbols
///
/// Journal rows may carry symbols the current table does not know (schema
/// drift, hand-edited files). Those score as neutral.
pub fn valence_of_symbol(symbol: &str) -> f64 {
    match Mood::from_symbol(symbol) {
        Some(mood) => mood.valence(),
        None => {
            tracing::warn!(symbol, "unknown mood symbol, scoring as neutral");
            NEUTRAL_VALENCE
        }
    }
}
