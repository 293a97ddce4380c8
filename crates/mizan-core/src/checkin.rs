//! Daily check-in snapshot and its derived evaluation
//!
//! A [`CheckIn`] is an immutable, serializable snapshot of one day's input,
//! passed by value into the pure scoring pipeline. There is no shared
//! mutable session state anywhere in the core; persistence is the only
//! mutation boundary.

use crate::error::ScoreError;
use crate::habits::HabitSet;
use crate::mood::Mood;
use crate::recommend::suggest_habits;
use crate::scoring::{alignment_score, AlignmentBand, SentimentBand};
use crate::sentiment::SentimentEstimator;
use serde::{Deserialize, Serialize};

/// One day's input: habit completion, mood, and reflection text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckIn {
    /// Required habit completion, fully populated over the catalog
    pub required: HabitSet,
    /// Bonus habit completion, fully populated over the catalog
    pub bonus: HabitSet,
    /// Today's mood
    pub mood: Mood,
    /// Free-text reflection, may be empty
    pub reflection: String,
}

impl CheckIn {
    /// Create a check-in snapshot
    pub fn new(
        required: HabitSet,
        bonus: HabitSet,
        mood: Mood,
        reflection: impl Into<String>,
    ) -> Self {
        Self {
            required,
            bonus,
            mood,
            reflection: reflection.into(),
        }
    }

    /// Run the full evaluation pipeline: sentiment, alignment, suggestions
    ///
    /// Idempotent and side-effect free; calling it again with the same
    /// snapshot and estimator yields the same [`Evaluation`].
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::EmptyHabitSet`] when a habit set is empty.
    pub fn evaluate(&self, estimator: &dyn SentimentEstimator) -> Result<Evaluation, ScoreError> {
        let sentiment_score = estimator.estimate(&self.reflection);
        let alignment = alignment_score(&self.required, &self.bonus, self.mood, sentiment_score)?;
        let recommendations = suggest_habits(&self.required, &self.bonus, self.mood, alignment);

        Ok(Evaluation {
            sentiment_score,
            alignment_score: alignment,
            recommendations,
        })
    }
}

/// Scores and suggestions derived from one [`CheckIn`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Reflection polarity in [-1, 1]
    pub sentiment_score: f64,
    /// Weighted composite in [0, 1]
    pub alignment_score: f64,
    /// Up to three habits to focus on tomorrow
    pub recommendations: Vec<String>,
}

impl Evaluation {
    /// Display band for the sentiment score
    pub fn sentiment_band(&self) -> SentimentBand {
        SentimentBand::of(self.sentiment_score)
    }

    /// Display band for the alignment score
    pub fn alignment_band(&self) -> AlignmentBand {
        AlignmentBand::of(self.alignment_score)
    }
}
