//! Reflection sentiment estimation
//!
//! Sentiment polarity is an external concern behind a trait seam: the
//! scoring core only requires a deterministic `text -> [-1, 1]` function.
//! [`LexiconSentiment`] is the bundled default, a small word-list
//! estimator. Swap in a heavier backend by implementing
//! [`SentimentEstimator`].

/// Estimates the emotional polarity of free text
pub trait SentimentEstimator {
    /// Polarity in [-1.0, 1.0]
    ///
    /// Contract: deterministic for identical text; empty or
    /// whitespace-only input yields exactly 0.0.
    fn estimate(&self, text: &str) -> f64;
}

/// Words counted as positive polarity
const POSITIVE_WORDS: [&str; 22] = [
    "alhamdulillah",
    "blessed",
    "calm",
    "clear",
    "content",
    "focused",
    "good",
    "grateful",
    "great",
    "happy",
    "hope",
    "hopeful",
    "joy",
    "light",
    "love",
    "patient",
    "peace",
    "peaceful",
    "rested",
    "strong",
    "thankful",
    "well",
];

/// Words counted as negative polarity
const NEGATIVE_WORDS: [&str; 22] = [
    "angry",
    "anxious",
    "bad",
    "doubt",
    "drained",
    "empty",
    "fear",
    "frustrated",
    "guilt",
    "guilty",
    "hard",
    "lonely",
    "lost",
    "overwhelmed",
    "pain",
    "restless",
    "sad",
    "stress",
    "stressed",
    "tired",
    "weak",
    "worried",
];

/// Word-list polarity estimator
///
/// Tokenizes on non-alphanumeric boundaries, lowercases, and scores
/// `(positive - negative) / (positive + negative)` over the
/// sentiment-bearing tokens. Text with no scored tokens is neutral.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconSentiment;

impl SentimentEstimator for LexiconSentiment {
    fn estimate(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }

        let mut positive = 0usize;
        let mut negative = 0usize;
        for token in text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            let token = token.to_lowercase();
            if POSITIVE_WORDS.contains(&token.as_str()) {
                positive += 1;
            } else if NEGATIVE_WORDS.contains(&token.as_str()) {
                negative += 1;
            }
        }

        let scored = positive + negative;
        if scored == 0 {
            return 0.0;
        }

        let polarity = (positive as f64 - negative as f64) / scored as f64;
        crate::scoring::round3(polarity.clamp(-1.0, 1.0))
    }
}
