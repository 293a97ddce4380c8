//! Habit recommendations
//!
//! Suggests up to three habits to focus on tomorrow: missed required
//! habits first, then self-care boosters when the day was low-alignment or
//! the mood negative.

use crate::habits::HabitSet;
use crate::mood::Mood;

/// Maximum number of suggestions returned
pub const MAX_SUGGESTIONS: usize = 3;

/// Alignment below this triggers emotional-booster suggestions
pub const LOW_ALIGNMENT_THRESHOLD: f64 = 0.5;

/// Bonus habits appended on low-alignment or negative-mood days, in order
pub const EMOTIONAL_BOOSTERS: [&str; 3] = ["Stretch", "Journal", "Lowered Gaze"];

/// Suggest habits to focus on tomorrow
///
/// Missed required habits come first, in catalog order. When
/// `alignment < LOW_ALIGNMENT_THRESHOLD` or the mood is negative, the
/// emotional boosters that exist in `bonus` and are still incomplete are
/// appended. The result is deduplicated preserving first occurrence and
/// truncated to [`MAX_SUGGESTIONS`]. An empty result means "no
/// suggestions" and is the expected output for a fully completed day.
pub fn suggest_habits(
    required: &HabitSet,
    bonus: &HabitSet,
    mood: Mood,
    alignment: f64,
) -> Vec<String> {
    let mut suggestions: Vec<String> = required.incomplete().map(str::to_string).collect();

    if alignment < LOW_ALIGNMENT_THRESHOLD || mood.is_negative() {
        for booster in EMOTIONAL_BOOSTERS {
            if bonus.is_completed(booster) == Some(false) {
                suggestions.push(booster.to_string());
            }
        }
    }

    let mut unique = Vec::with_capacity(suggestions.len());
    for habit in suggestions {
        if !unique.contains(&habit) {
            unique.push(habit);
        }
    }
    unique.truncate(MAX_SUGGESTIONS);
    unique
}
