//! Append-only CSV store for journal records

use super::record::{
    JournalRecord, COL_ALIGNMENT_SCORE, COL_MOOD, COL_RECOMMENDATIONS, COL_REFLECTION,
    COL_SENTIMENT_SCORE, COL_TIMESTAMP, FIXED_COLUMNS,
};
use crate::error::JournalError;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// Outcome of a guarded save
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveOutcome {
    /// The row was appended
    Saved,
    /// A row for the same UTC calendar day already exists; nothing was
    /// written. Not an error.
    AlreadyLogged,
}

/// The append-only journal file
///
/// The header row is written on first append and governs the layout of
/// every later row: values are emitted in header order, so catalog changes
/// never corrupt rows written under an older schema. Single-writer by
/// design; there is no cross-process locking.
#[derive(Debug, Clone)]
pub struct Journal {
    path: PathBuf,
}

impl Journal {
    /// Journal backed by the given CSV path; the file may not exist yet
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record
    ///
    /// Creates the parent directory and writes the header on first use.
    /// When the existing header lacks a habit column carried by the
    /// record, that habit is dropped from persistence with a warning
    /// rather than corrupting the tabular layout.
    pub fn append(&self, record: &JournalRecord) -> Result<(), JournalError> {
        let header = if self.path.exists() {
            self.read_header()?
        } else {
            Vec::new()
        };

        if header.is_empty() {
            return self.create_with_record(record);
        }

        for entry in &record.habits {
            if !header.iter().any(|col| col == &entry.name) {
                tracing::warn!(
                    habit = %entry.name,
                    "habit column missing from journal header, dropping from this row"
                );
            }
        }

        let file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|source| JournalError::Open {
                path: self.path.clone(),
                source,
            })?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.write_record(row_for_header(record, &header))?;
        writer.flush()?;
        Ok(())
    }

    /// Append one record unless its UTC calendar day is already logged
    ///
    /// The duplicate attempt is a no-op, reported as
    /// [`SaveOutcome::AlreadyLogged`].
    pub fn append_checked(&self, record: &JournalRecord) -> Result<SaveOutcome, JournalError> {
        let day = record.logical_day();
        let existing = self.load()?;
        if existing.iter().any(|r| r.logical_day() == day) {
            tracing::info!(%day, "check-in already logged for this day, skipping append");
            return Ok(SaveOutcome::AlreadyLogged);
        }

        self.append(record)?;
        Ok(SaveOutcome::Saved)
    }

    /// Load the full history, sorted ascending by timestamp
    ///
    /// A missing file is the valid first-run state and yields an empty
    /// history. Malformed rows are skipped with a warning; rows written
    /// under an older header simply lack the newer habit columns.
    pub fn load(&self) -> Result<Vec<JournalRecord>, JournalError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)?;
        let header: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        let mut records = Vec::new();
        for (index, row) in reader.records().enumerate() {
            let row = match row {
                Ok(row) => row,
                Err(err) => {
                    tracing::warn!(row = index + 2, %err, "skipping unreadable journal row");
                    continue;
                }
            };
            match parse_row(&header, &row) {
                Some(record) => records.push(record),
                None => {
                    tracing::warn!(row = index + 2, "skipping malformed journal row");
                }
            }
        }

        // Chronological order is re-established here so aggregation can
        // rely on it even for hand-edited files.
        records.sort_by_key(|r| r.timestamp);
        Ok(records)
    }

    fn read_header(&self) -> Result<Vec<String>, JournalError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)?;
        Ok(reader.headers()?.iter().map(str::to_string).collect())
    }

    fn create_with_record(&self, record: &JournalRecord) -> Result<(), JournalError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let header: Vec<String> = FIXED_COLUMNS
            .iter()
            .map(|c| c.to_string())
            .chain(record.habits.iter().map(|e| e.name.clone()))
            .collect();

        let mut writer = csv::Writer::from_path(&self.path)?;
        writer.write_record(&header)?;
        writer.write_record(row_for_header(record, &header))?;
        writer.flush()?;
        Ok(())
    }
}

fn row_for_header(record: &JournalRecord, header: &[String]) -> Vec<String> {
    header
        .iter()
        .map(|column| match column.as_str() {
            COL_TIMESTAMP => record.timestamp.to_rfc3339(),
            COL_MOOD => record.mood.clone(),
            COL_SENTIMENT_SCORE => record.sentiment_score.to_string(),
            COL_ALIGNMENT_SCORE => record.alignment_score.to_string(),
            COL_REFLECTION => record.reflection.clone(),
            COL_RECOMMENDATIONS => record.joined_recommendations(),
            habit => record.habit_completed(habit).unwrap_or(false).to_string(),
        })
        .collect()
}

fn parse_row(header: &[String], row: &csv::StringRecord) -> Option<JournalRecord> {
    let field = |name: &str| -> Option<&str> {
        header
            .iter()
            .position(|col| col == name)
            .and_then(|i| row.get(i))
    };

    let timestamp = parse_timestamp(field(COL_TIMESTAMP)?)?;
    let sentiment_score = field(COL_SENTIMENT_SCORE)?.trim().parse::<f64>().ok()?;
    let alignment_score = field(COL_ALIGNMENT_SCORE)?.trim().parse::<f64>().ok()?;
    let mood = field(COL_MOOD).unwrap_or("").to_string();
    let reflection = field(COL_REFLECTION).unwrap_or("").to_string();
    let recommendations = field(COL_RECOMMENDATIONS)
        .unwrap_or("")
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    let habits = header
        .iter()
        .enumerate()
        .filter(|(_, col)| !FIXED_COLUMNS.contains(&col.as_str()))
        .map(|(i, col)| crate::habits::HabitEntry {
            name: col.clone(),
            completed: row.get(i).map(parse_flag).unwrap_or(false),
        })
        .collect();

    Some(JournalRecord {
        timestamp,
        mood,
        sentiment_score,
        alignment_score,
        reflection,
        recommendations,
        habits,
    })
}

/// Timestamps are written as RFC 3339; naive ISO-8601 stamps from older
/// tools are read back as UTC.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Boolean columns tolerate the spellings of every writer that has
/// produced journal files so far; anything unrecognized reads as false.
fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkin::CheckIn;
    use crate::habits::HabitCatalog;
    use crate::mood::Mood;
    use crate::sentiment::LexiconSentiment;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn record_for_day(day: u32, reflection: &str, fajr_done: bool) -> JournalRecord {
        let mut required = HabitCatalog::required_default().empty_set();
        required.set_completed("Fajr", fajr_done);
        let checkin = CheckIn::new(
            required,
            HabitCatalog::bonus_default().empty_set(),
            Mood::Neutral,
            reflection,
        );
        let eval = checkin.evaluate(&LexiconSentiment).unwrap();
        let stamp = Utc.with_ymd_and_hms(2025, 6, day, 21, 0, 0).unwrap();
        JournalRecord::from_checkin(&checkin, &eval, stamp)
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let dir = TempDir::new().unwrap();
        let journal = Journal::new(dir.path().join("journal.csv"));

        let record = record_for_day(1, "a \"quoted\" note, with commas\nand a newline", true);
        journal.append(&record).unwrap();

        let loaded = journal.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].timestamp, record.timestamp);
        assert_eq!(loaded[0].mood, "😐");
        assert_eq!(
            loaded[0].reflection,
            "a \"quoted\" note, with commas\nand a newline"
        );
        assert_eq!(loaded[0].alignment_score, record.alignment_score);
        assert_eq!(loaded[0].recommendations, record.recommendations);
        assert_eq!(loaded[0].habit_completed("Fajr"), Some(true));
        assert_eq!(loaded[0].habit_completed("Isha"), Some(false));
    }

    #[test]
    fn test_missing_file_is_empty_history() {
        let dir = TempDir::new().unwrap();
        let journal = Journal::new(dir.path().join("nope.csv"));
        assert!(journal.load().unwrap().is_empty());
    }

    #[test]
    fn test_append_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let journal = Journal::new(dir.path().join("data").join("journal.csv"));
        journal.append(&record_for_day(1, "", false)).unwrap();
        assert!(journal.path().exists());
    }

    #[test]
    fn test_duplicate_day_is_a_noop() {
        let dir = TempDir::new().unwrap();
        let journal = Journal::new(dir.path().join("journal.csv"));

        let first = journal.append_checked(&record_for_day(1, "", true)).unwrap();
        let second = journal
            .append_checked(&record_for_day(1, "second attempt", false))
            .unwrap();
        let next_day = journal.append_checked(&record_for_day(2, "", true)).unwrap();

        assert_eq!(first, SaveOutcome::Saved);
        assert_eq!(second, SaveOutcome::AlreadyLogged);
        assert_eq!(next_day, SaveOutcome::Saved);

        let loaded = journal.load().unwrap();
        assert_eq!(loaded.len(), 2);
        // The duplicate attempt left the original row untouched
        assert_eq!(loaded[0].habit_completed("Fajr"), Some(true));
    }

    #[test]
    fn test_load_sorts_ascending_by_timestamp() {
        let dir = TempDir::new().unwrap();
        let journal = Journal::new(dir.path().join("journal.csv"));

        journal.append(&record_for_day(5, "", true)).unwrap();
        journal.append(&record_for_day(2, "", true)).unwrap();
        journal.append(&record_for_day(9, "", true)).unwrap();

        let days: Vec<u32> = journal
            .load()
            .unwrap()
            .iter()
            .map(|r| chrono::Datelike::day(&r.logical_day()))
            .collect();
        assert_eq!(days, vec![2, 5, 9]);
    }

    #[test]
    fn test_malformed_rows_are_skipped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("journal.csv");
        let journal = Journal::new(&path);
        journal.append(&record_for_day(1, "", true)).unwrap();

        let mut content = std::fs::read_to_string(&path).unwrap();
        content.push_str("not-a-timestamp,😐,x,y,,,true\n");
        std::fs::write(&path, content).unwrap();

        assert_eq!(journal.load().unwrap().len(), 1);
    }

    #[test]
    fn test_naive_timestamps_read_as_utc() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("journal.csv");
        std::fs::write(
            &path,
            "timestamp,mood,sentiment_score,alignment_score,reflection,recommendations,Fajr\n\
             2025-06-01T08:30:00.123456,😊,0.2,0.6,fine,Asr; Isha,True\n",
        )
        .unwrap();

        let loaded = Journal::new(&path).load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(
            loaded[0].timestamp,
            Utc.with_ymd_and_hms(2025, 6, 1, 8, 30, 0).unwrap()
                + chrono::Duration::microseconds(123456)
        );
        assert_eq!(loaded[0].habit_completed("Fajr"), Some(true));
        assert_eq!(
            loaded[0].recommendations,
            vec!["Asr".to_string(), "Isha".to_string()]
        );
    }

    #[test]
    fn test_new_habit_column_does_not_corrupt_old_rows() {
        let dir = TempDir::new().unwrap();
        let journal = Journal::new(dir.path().join("journal.csv"));

        // Day 1 written under the default catalog
        let old = record_for_day(1, "", true);
        journal.append(&old).unwrap();

        // Catalog grows; day 2's record carries an extra habit
        let grown = HabitCatalog::new(
            HabitCatalog::required_default()
                .names()
                .chain(std::iter::once("Fast Mondays")),
        );
        let mut required = grown.empty_set();
        required.set_completed("Fast Mondays", true);
        let checkin = CheckIn::new(
            required,
            HabitCatalog::bonus_default().empty_set(),
            Mood::Neutral,
            "",
        );
        let eval = checkin.evaluate(&LexiconSentiment).unwrap();
        let stamp = Utc.with_ymd_and_hms(2025, 6, 2, 21, 0, 0).unwrap();
        journal
            .append(&JournalRecord::from_checkin(&checkin, &eval, stamp))
            .unwrap();

        let loaded = journal.load().unwrap();
        assert_eq!(loaded.len(), 2);
        // The recorded day-1 alignment score is untouched by the change
        assert_eq!(loaded[0].alignment_score, old.alignment_score);
        // The new habit is not a column in this file; both rows read it as absent
        assert_eq!(loaded[0].habit_completed("Fast Mondays"), None);
        assert_eq!(loaded[1].habit_completed("Fajr"), Some(false));
    }
}
