//! Dead-zone thresholding of compound scores into labels.

use super::analyzer::{LexiconAnalyzer, PolarityScorer, ScoringError};
use super::cache::SentimentCache;
use super::SentimentLabel;

/// Scores at or above this value are Positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Scores at or below this value are Negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Map a compound score to a label.
pub fn label_for_score(score: f64) -> SentimentLabel {
    if score >= POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if score <= NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// Outcome of classifying one text.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: SentimentLabel,
    /// Set when scoring failed and the label fell back to Neutral.
    pub warning: Option<ScoringError>,
    /// Whether the label came from the cache.
    pub cached: bool,
}

impl Classification {
    fn fresh(label: SentimentLabel) -> Self {
        Self {
            label,
            warning: None,
            cached: false,
        }
    }
}

/// Scorer plus the memoization cache it feeds.
pub struct Classifier {
    scorer: Box<dyn PolarityScorer>,
    cache: SentimentCache,
}

impl std::fmt::Debug for Classifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Classifier")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(Box::new(LexiconAnalyzer::default()), SentimentCache::unbounded())
    }
}

impl Classifier {
    pub fn new(scorer: Box<dyn PolarityScorer>, cache: SentimentCache) -> Self {
        Self { scorer, cache }
    }

    /// Lexicon analyzer with a cache bounded to `cache_capacity` (`0` = unbounded).
    pub fn lexicon(cache_capacity: usize) -> Self {
        Self::new(
            Box::new(LexiconAnalyzer::default()),
            SentimentCache::with_capacity(cache_capacity),
        )
    }

    /// Label a review summary.
    ///
    /// Missing or empty text is Neutral without scoring. Scoring failures are
    /// logged, returned as a warning, labeled Neutral and not cached.
    pub fn classify(&mut self, text: Option<&str>) -> Classification {
        let Some(text) = text.filter(|text| !text.is_empty()) else {
            return Classification::fresh(SentimentLabel::Neutral);
        };
        if let Some(label) = self.cache.get(text) {
            return Classification {
                label,
                warning: None,
                cached: true,
            };
        }
        match self.scorer.compound(text) {
            Ok(score) => {
                let label = label_for_score(score);
                self.cache.insert(text, label);
                Classification::fresh(label)
            }
            Err(err) => {
                tracing::warn!("Sentiment scoring failed, using Neutral: {err}");
                Classification {
                    label: SentimentLabel::Neutral,
                    warning: Some(err),
                    cached: false,
                }
            }
        }
    }

    pub fn cache(&self) -> &SentimentCache {
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn scorer(
        f: impl Fn(&str) -> Result<f64, ScoringError> + 'static,
    ) -> Box<dyn PolarityScorer> {
        Box::new(f)
    }

    fn fixed(score: f64) -> Classifier {
        Classifier::new(scorer(move |_| Ok(score)), SentimentCache::unbounded())
    }

    #[test]
    fn thresholds_include_their_boundaries() {
        assert_eq!(label_for_score(0.05), SentimentLabel::Positive);
        assert_eq!(label_for_score(-0.05), SentimentLabel::Negative);
        assert_eq!(label_for_score(0.0), SentimentLabel::Neutral);
        assert_eq!(label_for_score(0.049_999), SentimentLabel::Neutral);
        assert_eq!(label_for_score(-0.049_999), SentimentLabel::Neutral);
        assert_eq!(label_for_score(1.0), SentimentLabel::Positive);
        assert_eq!(label_for_score(-1.0), SentimentLabel::Negative);
    }

    #[test]
    fn scorer_output_drives_the_label() {
        assert_eq!(fixed(0.05).classify(Some("x")).label, SentimentLabel::Positive);
        assert_eq!(fixed(-0.05).classify(Some("x")).label, SentimentLabel::Negative);
        assert_eq!(fixed(0.0).classify(Some("x")).label, SentimentLabel::Neutral);
    }

    #[test]
    fn missing_text_is_neutral_without_scoring() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let mut classifier = Classifier::new(
            scorer(move |_| {
                counter.set(counter.get() + 1);
                Ok(0.9)
            }),
            SentimentCache::unbounded(),
        );
        assert_eq!(classifier.classify(None).label, SentimentLabel::Neutral);
        assert_eq!(classifier.classify(Some("")).label, SentimentLabel::Neutral);
        assert_eq!(calls.get(), 0);
        assert!(classifier.cache().is_empty());
    }

    #[test]
    fn repeated_text_is_served_from_cache() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let mut classifier = Classifier::new(
            scorer(move |_| {
                counter.set(counter.get() + 1);
                Ok(-0.4)
            }),
            SentimentCache::unbounded(),
        );
        let first = classifier.classify(Some("broken on arrival"));
        let second = classifier.classify(Some("broken on arrival"));
        assert_eq!(first.label, second.label);
        assert!(!first.cached);
        assert!(second.cached);
        assert_eq!(calls.get(), 1);
        assert_eq!(classifier.cache().stats().hits, 1);
    }

    #[test]
    fn scoring_failure_degrades_to_neutral_and_is_not_cached() {
        let mut classifier = Classifier::new(
            scorer(|_| Err(ScoringError::Unavailable("model offline".into()))),
            SentimentCache::unbounded(),
        );
        let outcome = classifier.classify(Some("great product"));
        assert_eq!(outcome.label, SentimentLabel::Neutral);
        assert_eq!(
            outcome.warning,
            Some(ScoringError::Unavailable("model offline".into()))
        );
        assert!(!classifier.cache().contains("great product"));
    }

    #[test]
    fn non_finite_score_errors_degrade_to_neutral() {
        let mut classifier = Classifier::new(
            scorer(|_| Err(ScoringError::NonFiniteScore { score: f64::NAN })),
            SentimentCache::unbounded(),
        );
        let outcome = classifier.classify(Some("anything"));
        assert_eq!(outcome.label, SentimentLabel::Neutral);
        assert!(matches!(
            outcome.warning,
            Some(ScoringError::NonFiniteScore { .. })
        ));
    }

    #[test]
    fn lexicon_classifier_is_deterministic() {
        let mut classifier = Classifier::lexicon(16);
        let texts = ["great product", "terrible experience", "it's fine"];
        let first: Vec<_> = texts
            .iter()
            .map(|text| classifier.classify(Some(text)).label)
            .collect();
        let mut fresh = Classifier::lexicon(0);
        let second: Vec<_> = texts
            .iter()
            .map(|text| fresh.classify(Some(text)).label)
            .collect();
        assert_eq!(first, second);
        assert_eq!(
            first,
            vec![
                SentimentLabel::Positive,
                SentimentLabel::Negative,
                SentimentLabel::Neutral
            ]
        );
    }
}
