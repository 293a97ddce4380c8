//! Mizan Core - Daily habit and reflection tracking engine
//!
//! Mizan records one check-in per day - prayer/habit completion, mood, and
//! a free-text reflection - derives a sentiment score, an alignment score,
//! and habit suggestions for tomorrow, and appends the result to an
//! append-only journal that the dashboard aggregates later.
//!
//! # Architecture
//!
//! The core is a chain of pure functions over immutable snapshots:
//!
//! ```text
//! CheckIn --> SentimentEstimator --> alignment_score() --> suggest_habits()
//!    |                                                          |
//!    +------------------> JournalRecord <----------------------+
//!                              |
//!                              v
//!                  Journal (append-only CSV)
//!                              |
//!                              v
//!           trailing_streak() / DashboardSummary
//! ```
//!
//! Persistence is the only mutation boundary. Everything upstream of
//! [`Journal::append`] is idempotent and side-effect free, so the caller
//! can recompute on every input change and only save once.
//!
//! # Quick Start
//!
//! ```
//! use mizan_core::{CheckIn, HabitCatalog, LexiconSentiment, Mood};
//!
//! let mut required = HabitCatalog::required_default().empty_set();
//! required.set_completed("Fajr", true);
//! required.set_completed("Dhuhr", true);
//!
//! let checkin = CheckIn::new(
//!     required,
//!     HabitCatalog::bonus_default().empty_set(),
//!     Mood::Neutral,
//!     "",
//! );
//!
//! let eval = checkin.evaluate(&LexiconSentiment).unwrap();
//! assert_eq!(eval.alignment_score, 0.314);
//! assert_eq!(eval.recommendations, vec!["Asr", "Maghrib", "Isha"]);
//! ```
//!
//! # Design Principles
//!
//! 1. **Snapshots in, values out**: no global mutable state; the check-in
//!    is an explicit value passed into the scoring pipeline
//! 2. **Soft defaults at the data boundary**: unknown moods score as
//!    neutral, missing habit columns read as incomplete - steady-state
//!    conditions, never hard failures
//! 3. **History is immutable**: recorded scores are never recomputed, so
//!    catalog changes cannot rewrite the past

#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, missing_debug_implementations)]

pub mod analytics;
pub mod checkin;
pub mod config;
pub mod error;
pub mod habits;
pub mod journal;
pub mod mood;
pub mod recommend;
pub mod scoring;
pub mod sentiment;

pub use analytics::{
    dashboard_view, filter_range, trailing_streak, DashboardSummary, DashboardView,
};
pub use checkin::{CheckIn, Evaluation};
pub use config::Config;
pub use error::{JournalError, MizanError, Result, ScoreError};
pub use habits::{HabitCatalog, HabitEntry, HabitSet};
pub use journal::{Journal, JournalRecord, SaveOutcome};
pub use mood::Mood;
pub use recommend::suggest_habits;
pub use scoring::{alignment_score, AlignmentBand, SentimentBand};
pub use sentiment::{LexiconSentiment, SentimentEstimator};
