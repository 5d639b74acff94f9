//! Review sentiment classification.
//!
//! A static lexicon analyzer produces a compound polarity score per text;
//! [`classifier`] maps it to a [`SentimentLabel`] with a dead zone around
//! zero and memoizes results through an explicit [`cache::SentimentCache`].

pub mod analyzer;
pub mod cache;
pub mod classifier;
pub mod lexicon;

pub use analyzer::{LexiconAnalyzer, PolarityScorer, ScoringError};
pub use cache::{CacheStats, SentimentCache};
pub use classifier::{Classification, Classifier, label_for_score};

use std::fmt;

/// Three-way sentiment classification of a review.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SentimentLabel {
    Negative,
    Neutral,
    Positive,
}

impl SentimentLabel {
    /// Display order used by the chart: Negative, Neutral, Positive.
    pub const CANONICAL_ORDER: [SentimentLabel; 3] = [
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
        SentimentLabel::Positive,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Positive => "Positive",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
