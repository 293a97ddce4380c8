//! Append-only check-in journal
//!
//! One immutable row per saved check-in, stored as a CSV file with a
//! header row: the fixed columns first, then one boolean column per
//! required habit and per bonus habit, keyed by display name. Rows are
//! never mutated or deleted; consumers read the whole history back and
//! aggregate over it.

pub mod record;
pub mod store;

pub use record::JournalRecord;
pub use store::{Journal, SaveOutcome};
