//! Alignment scoring
//!
//! The alignment score is a weighted composite in [0, 1] summarizing habit
//! completion, mood, and reflection sentiment for one day. It is recomputed
//! fresh from the current inputs on every evaluation, never updated
//! incrementally.

use crate::error::ScoreError;
use crate::habits::HabitSet;
use crate::mood::Mood;
use serde::{Deserialize, Serialize};

/// Weight of the required-habit completion ratio
pub const W_REQUIRED: f64 = 0.4;
/// Weight of the bonus-habit completion ratio
pub const W_BONUS: f64 = 0.2;
/// Weight of the mood valence
pub const W_MOOD: f64 = 0.2;
/// Weight of the normalized reflection sentiment
pub const W_SENTIMENT: f64 = 0.2;

/// Round to 3 decimal places, the precision of every recorded score
pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Compute the alignment score for one day
///
/// `sentiment` is the reflection polarity in [-1, 1]; it is rescaled to
/// [0, 1] before weighting. The weights sum to 1.0, which keeps the result
/// inside [0, 1] for well-formed inputs. The result is rounded to 3
/// decimal places.
///
/// # Errors
///
/// Returns [`ScoreError::EmptyHabitSet`] when either set is empty; the
/// completion ratios divide by set size, so the caller must supply the
/// fully populated canonical sets.
pub fn alignment_score(
    required: &HabitSet,
    bonus: &HabitSet,
    mood: Mood,
    sentiment: f64,
) -> Result<f64, ScoreError> {
    if required.is_empty() {
        return Err(ScoreError::EmptyHabitSet("required"));
    }
    if bonus.is_empty() {
        return Err(ScoreError::EmptyHabitSet("bonus"));
    }

    let required_ratio = required.completed_count() as f64 / required.len() as f64;
    let bonus_ratio = bonus.completed_count() as f64 / bonus.len() as f64;
    let mood_valence = mood.valence();
    let normalized_sentiment = (sentiment + 1.0) / 2.0;

    let alignment = required_ratio * W_REQUIRED
        + bonus_ratio * W_BONUS
        + mood_valence * W_MOOD
        + normalized_sentiment * W_SENTIMENT;

    tracing::debug!(
        required_ratio,
        bonus_ratio,
        mood_valence,
        normalized_sentiment,
        alignment,
        "computed alignment score"
    );

    Ok(round3(alignment))
}

/// Display band for an alignment score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignmentBand {
    /// Above 0.75: highly aligned
    High,
    /// Above 0.4: moderately aligned
    Moderate,
    /// 0.4 and below: out of sync
    Low,
}

impl AlignmentBand {
    /// Classify a score
    pub fn of(score: f64) -> Self {
        if score > 0.75 {
            AlignmentBand::High
        } else if score > 0.4 {
            AlignmentBand::Moderate
        } else {
            AlignmentBand::Low
        }
    }

    /// Human-readable summary line
    pub fn describe(self) -> &'static str {
        match self {
            AlignmentBand::High => "You're highly aligned today.",
            AlignmentBand::Moderate => "You're moderately aligned. Keep going.",
            AlignmentBand::Low => "You may be out of sync. Consider a reset.",
        }
    }
}

/// Display band for a reflection sentiment score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentBand {
    /// Above 0.2
    Positive,
    /// Between -0.2 and 0.2 inclusive
    Neutral,
    /// Below -0.2
    Negative,
}

impl SentimentBand {
    /// Classify a polarity score
    pub fn of(score: f64) -> Self {
        if score > 0.2 {
            SentimentBand::Positive
        } else if score < -0.2 {
            SentimentBand::Negative
        } else {
            SentimentBand::Neutral
        }
    }

    /// Human-readable summary line
    pub fn describe(self) -> &'static str {
        match self {
            SentimentBand::Positive => "Your reflection seems positive.",
            SentimentBand::Neutral => "Your reflection seems neutral.",
            SentimentBand::Negative => "Your reflection seems negative.",
        }
    }
}
