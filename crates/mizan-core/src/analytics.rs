//! History analytics: streaks and dashboard aggregates
//!
//! Everything here is a pure function over a loaded journal history.
//! [`Journal::load`](crate::journal::Journal::load) returns records sorted
//! ascending by timestamp, which the trailing-streak scan relies on.

use crate::habits::HabitCatalog;
use crate::journal::JournalRecord;
use crate::scoring::round3;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Trailing consecutive-completion streak for one habit
///
/// Scans from the most recent record backward and counts consecutive
/// completions, stopping at the first record where the habit is incomplete
/// or was never recorded. `history` must be sorted ascending by timestamp;
/// the journal loader guarantees this for loaded histories.
///
/// An empty history, or a habit that no record has a column for, yields 0.
/// That is the expected "no data" state, not an error.
pub fn trailing_streak(history: &[JournalRecord], habit: &str) -> usize {
    if history.is_empty() {
        return 0;
    }
    if !history.iter().any(|r| r.habit_completed(habit).is_some()) {
        tracing::warn!(habit, "habit not recorded anywhere in history");
        return 0;
    }

    history
        .iter()
        .rev()
        .take_while(|r| r.habit_completed(habit).unwrap_or(false))
        .count()
}

/// Keep only records whose UTC calendar day falls inside `[from, to]`
///
/// Either bound may be omitted; both are inclusive.
pub fn filter_range(
    history: &[JournalRecord],
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Vec<JournalRecord> {
    history
        .iter()
        .filter(|r| {
            let day = r.logical_day();
            from.map_or(true, |f| day >= f) && to.map_or(true, |t| day <= t)
        })
        .cloned()
        .collect()
}

/// One point in the alignment-over-time series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlignmentPoint {
    /// Record creation time
    pub timestamp: DateTime<Utc>,
    /// Recorded alignment score
    pub score: f64,
}

/// How often one mood symbol appears in the history
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodCount {
    /// Mood symbol as recorded
    pub mood: String,
    /// Number of records with this symbol
    pub count: usize,
}

/// Total completions for one habit across the history
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HabitTotal {
    /// Habit display name
    pub habit: String,
    /// Number of records where it was completed
    pub completed: usize,
}

/// Current trailing streak for one habit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HabitStreak {
    /// Habit display name
    pub habit: String,
    /// Consecutive most-recent completions
    pub days: usize,
}

/// Aggregate view over a journal history
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    /// Number of records aggregated
    pub entries: usize,
    /// Mean recorded alignment score, rounded to 3 decimals
    pub average_alignment: f64,
    /// Alignment score over time, ascending
    pub alignment_series: Vec<AlignmentPoint>,
    /// Mood frequency, in first-seen order
    pub mood_counts: Vec<MoodCount>,
    /// Completion totals for every habit column seen, in first-seen order
    pub habit_totals: Vec<HabitTotal>,
    /// Trailing streaks for the required catalog
    pub streaks: Vec<HabitStreak>,
}

impl DashboardSummary {
    /// Aggregate a history; streaks are computed for `required`
    ///
    /// Records missing a habit column count as not-completed for that
    /// habit, so histories spanning a catalog change aggregate cleanly.
    pub fn from_records(records: &[JournalRecord], required: &HabitCatalog) -> Self {
        let entries = records.len();

        let average_alignment = if entries == 0 {
            0.0
        } else {
            round3(records.iter().map(|r| r.alignment_score).sum::<f64>() / entries as f64)
        };

        let alignment_series = records
            .iter()
            .map(|r| AlignmentPoint {
                timestamp: r.timestamp,
                score: r.alignment_score,
            })
            .collect();

        let mut mood_counts: Vec<MoodCount> = Vec::new();
        for record in records {
            match mood_counts.iter_mut().find(|m| m.mood == record.mood) {
                Some(entry) => entry.count += 1,
                None => mood_counts.push(MoodCount {
                    mood: record.mood.clone(),
                    count: 1,
                }),
            }
        }

        let mut habit_totals: Vec<HabitTotal> = Vec::new();
        for record in records {
            for entry in &record.habits {
                match habit_totals.iter_mut().find(|t| t.habit == entry.name) {
                    Some(total) => total.completed += usize::from(entry.completed),
                    None => habit_totals.push(HabitTotal {
                        habit: entry.name.clone(),
                        completed: usize::from(entry.completed),
                    }),
                }
            }
        }

        let streaks = required
            .names()
            .map(|habit| HabitStreak {
                habit: habit.to_string(),
                days: trailing_streak(records, habit),
            })
            .collect();

        Self {
            entries,
            average_alignment,
            alignment_series,
            mood_counts,
            habit_totals,
            streaks,
        }
    }
}

/// Dashboard state for a (possibly filtered) history
///
/// "Journal is empty" and "the date filter matched nothing" are distinct
/// states and are reported distinctly.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DashboardView {
    /// No journal entries exist at all
    NoData,
    /// The journal has entries, but none inside the requested range
    EmptyRange,
    /// Aggregates over the selected records
    Summary(DashboardSummary),
}

/// Build the dashboard view for a history and optional date range
pub fn dashboard_view(
    history: &[JournalRecord],
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    required: &HabitCatalog,
) -> DashboardView {
    if history.is_empty() {
        return DashboardView::NoData;
    }

    let selected = filter_range(history, from, to);
    if selected.is_empty() {
        return DashboardView::EmptyRange;
    }

    DashboardView::Summary(DashboardSummary::from_records(&selected, required))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habits::HabitEntry;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn record(day: u32, mood: &str, alignment: f64, fajr: Option<bool>) -> JournalRecord {
        let mut habits = vec![HabitEntry {
            name: "Dhuhr".to_string(),
            completed: true,
        }];
        if let Some(completed) = fajr {
            habits.push(HabitEntry {
                name: "Fajr".to_string(),
                completed,
            });
        }
        JournalRecord {
            timestamp: Utc.with_ymd_and_hms(2025, 6, day, 20, 0, 0).unwrap(),
            mood: mood.to_string(),
            sentiment_score: 0.0,
            alignment_score: alignment,
            reflection: String::new(),
            recommendations: Vec::new(),
            habits,
        }
    }

    #[test]
    fn test_streak_empty_history_is_zero() {
        assert_eq!(trailing_streak(&[], "Fajr"), 0);
    }

    #[test]
    fn test_streak_unknown_habit_is_zero() {
        let history = vec![record(1, "😊", 0.5, Some(true))];
        assert_eq!(trailing_streak(&history, "Swimming"), 0);
    }

    #[test]
    fn test_streak_broken_by_most_recent_false() {
        let history = vec![
            record(1, "😊", 0.5, Some(true)),
            record(2, "😊", 0.5, Some(true)),
            record(3, "😊", 0.5, Some(false)),
        ];
        assert_eq!(trailing_streak(&history, "Fajr"), 0);
    }

    #[test]
    fn test_streak_counts_trailing_run_only() {
        let history = vec![
            record(1, "😊", 0.5, Some(false)),
            record(2, "😊", 0.5, Some(true)),
            record(3, "😊", 0.5, Some(true)),
            record(4, "😊", 0.5, Some(true)),
        ];
        assert_eq!(trailing_streak(&history, "Fajr"), 3);
    }

    #[test]
    fn test_streak_missing_column_reads_as_incomplete() {
        let history = vec![
            record(1, "😊", 0.5, Some(true)),
            record(2, "😊", 0.5, None),
            record(3, "😊", 0.5, Some(true)),
        ];
        assert_eq!(trailing_streak(&history, "Fajr"), 1);
    }

    #[test]
    fn test_filter_range_inclusive_bounds() {
        let history = vec![
            record(1, "😊", 0.5, Some(true)),
            record(5, "😊", 0.5, Some(true)),
            record(9, "😊", 0.5, Some(true)),
        ];
        let from = NaiveDate::from_ymd_opt(2025, 6, 5).unwrap();
        let to = NaiveDate::from_ymd_opt(2025, 6, 9).unwrap();

        assert_eq!(filter_range(&history, Some(from), Some(to)).len(), 2);
        assert_eq!(filter_range(&history, None, Some(from)).len(), 2);
        assert_eq!(filter_range(&history, Some(from), None).len(), 2);
        assert_eq!(filter_range(&history, None, None).len(), 3);
    }

    #[test]
    fn test_summary_aggregates() {
        let history = vec![
            record(1, "😊", 0.8, Some(true)),
            record(2, "😭", 0.2, Some(false)),
            record(3, "😊", 0.5, Some(true)),
        ];
        let summary = DashboardSummary::from_records(&history, &HabitCatalog::required_default());

        assert_eq!(summary.entries, 3);
        assert_eq!(summary.average_alignment, 0.5);
        assert_eq!(summary.alignment_series.len(), 3);
        assert_eq!(
            summary.mood_counts,
            vec![
                MoodCount {
                    mood: "😊".to_string(),
                    count: 2
                },
                MoodCount {
                    mood: "😭".to_string(),
                    count: 1
                },
            ]
        );
        let fajr_total = summary
            .habit_totals
            .iter()
            .find(|t| t.habit == "Fajr")
            .unwrap();
        assert_eq!(fajr_total.completed, 2);
        let fajr_streak = summary.streaks.iter().find(|s| s.habit == "Fajr").unwrap();
        assert_eq!(fajr_streak.days, 1);
    }

    #[test]
    fn test_view_distinguishes_no_data_from_empty_range() {
        let required = HabitCatalog::required_default();
        assert_eq!(dashboard_view(&[], None, None, &required), DashboardView::NoData);

        let history = vec![record(1, "😊", 0.5, Some(true))];
        let far_future = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        assert_eq!(
            dashboard_view(&history, Some(far_future), None, &required),
            DashboardView::EmptyRange
        );
        assert!(matches!(
            dashboard_view(&history, None, None, &required),
            DashboardView::Summary(_)
        ));
    }

    proptest! {
        #[test]
        fn prop_streak_equals_trailing_true_run(run in 0usize..20, older_false in any::<bool>()) {
            // Oldest-to-newest: optional false, then `run` consecutive trues
            let mut history = Vec::new();
            let mut day = 1u32;
            if older_false {
                history.push(record(day, "😐", 0.5, Some(false)));
                day += 1;
            }
            for _ in 0..run {
                history.push(record(day, "😐", 0.5, Some(true)));
                day += 1;
            }
            prop_assert_eq!(trailing_streak(&history, "Fajr"), run);
        }
    }
}
