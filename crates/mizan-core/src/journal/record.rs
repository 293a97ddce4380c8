//! Journal record type and column layout

use crate::checkin::{CheckIn, Evaluation};
use crate::habits::HabitEntry;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// ISO-8601 creation timestamp column
pub const COL_TIMESTAMP: &str = "timestamp";
/// Mood symbol column
pub const COL_MOOD: &str = "mood";
/// Reflection polarity column
pub const COL_SENTIMENT_SCORE: &str = "sentiment_score";
/// Alignment composite column
pub const COL_ALIGNMENT_SCORE: &str = "alignment_score";
/// Raw reflection text column
pub const COL_REFLECTION: &str = "reflection";
/// Semicolon-joined suggestions column
pub const COL_RECOMMENDATIONS: &str = "recommendations";

/// The non-habit columns, in layout order
pub const FIXED_COLUMNS: [&str; 6] = [
    COL_TIMESTAMP,
    COL_MOOD,
    COL_SENTIMENT_SCORE,
    COL_ALIGNMENT_SCORE,
    COL_REFLECTION,
    COL_RECOMMENDATIONS,
];

/// Separator between habit names in the recommendations column
pub const RECOMMENDATION_SEPARATOR: &str = "; ";

/// One immutable journal row
///
/// Created once at submission time and read-only thereafter. The recorded
/// scores are never recomputed: adding habits to the catalogs later must
/// not change what history says about past days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalRecord {
    /// Creation time (UTC)
    pub timestamp: DateTime<Utc>,
    /// Mood symbol as recorded; may be outside the current mood table
    pub mood: String,
    /// Reflection polarity in [-1, 1]
    pub sentiment_score: f64,
    /// Alignment composite in [0, 1]
    pub alignment_score: f64,
    /// Raw reflection text
    pub reflection: String,
    /// Suggested habits, in recommendation order
    pub recommendations: Vec<String>,
    /// Habit completion flags: required habits first, then bonus, in
    /// catalog order
    pub habits: Vec<HabitEntry>,
}

impl JournalRecord {
    /// Build the row for a check-in and its evaluation
    pub fn from_checkin(checkin: &CheckIn, eval: &Evaluation, timestamp: DateTime<Utc>) -> Self {
        let habits = checkin
            .required
            .iter()
            .chain(checkin.bonus.iter())
            .cloned()
            .collect();

        Self {
            timestamp,
            mood: checkin.mood.symbol().to_string(),
            sentiment_score: eval.sentiment_score,
            alignment_score: eval.alignment_score,
            reflection: checkin.reflection.clone(),
            recommendations: eval.recommendations.clone(),
            habits,
        }
    }

    /// Completion flag for a habit column, `None` when this row never
    /// recorded that habit
    pub fn habit_completed(&self, name: &str) -> Option<bool> {
        self.habits
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.completed)
    }

    /// The UTC calendar day this row belongs to
    pub fn logical_day(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    /// Recommendations serialized for the CSV column
    pub fn joined_recommendations(&self) -> String {
        self.recommendations.join(RECOMMENDATION_SEPARATOR)
    }
}
