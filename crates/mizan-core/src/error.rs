//! Error types for Mizan Core
//!
//! This module defines all error types used throughout the Mizan core engine.
//! We use `thiserror` for ergonomic error definitions with automatic Display/Error implementations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Mizan operations
pub type Result<T> = std::result::Result<T, MizanError>;

/// Main error type for Mizan operations
#[derive(Error, Debug)]
pub enum MizanError {
    /// Scoring precondition violations
    #[error("Score error: {0}")]
    Score(#[from] ScoreError),

    /// Journal persistence errors
    #[error("Journal error: {0}")]
    Journal(#[from] JournalError),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        source: Box<MizanError>,
    },
}

/// Errors raised by the scoring core
///
/// These are precondition violations: the caller must supply well-formed
/// canonical habit sets. Unknown moods and missing habit columns are NOT
/// errors anywhere in the crate; they fall back to documented defaults.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    #[error("Cannot score an empty {0} habit set")]
    EmptyHabitSet(&'static str),
}

/// Errors raised by the journal store
///
/// A journal failure never invalidates an in-memory evaluation: saving and
/// scoring are independent failure domains.
#[derive(Error, Debug)]
pub enum JournalError {
    #[error("Cannot open journal at {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MizanError {
    /// Add context to an error
    pub fn context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to a Result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add lazy context to a Result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.context(f()))
    }
}
