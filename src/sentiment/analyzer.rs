//! Rule-based compound polarity scoring.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use super::lexicon::Lexicon;

/// Emphasis added to an ALL-CAPS sentiment word inside mixed-case text.
pub const CAPS_INCREMENT: f64 = 0.733;
/// Multiplier applied to a sentiment word preceded by a negation.
pub const NEGATION_SCALAR: f64 = -0.74;
/// Normalization constant of the compound score.
pub const NORMALIZATION_ALPHA: f64 = 15.0;

const NEGATION_WINDOW: usize = 3;
const BEFORE_BUT_WEIGHT: f64 = 0.5;
const AFTER_BUT_WEIGHT: f64 = 1.5;
const EXCLAMATION_INCREMENT: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const QUESTION_INCREMENT: f64 = 0.18;
const MAX_QUESTION_EMPHASIS: f64 = 0.96;

/// Failure raised while scoring a single text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    /// The analyzer produced NaN or an infinite score.
    #[error("scorer produced a non-finite score ({score})")]
    NonFiniteScore { score: f64 },
    /// The scoring backend could not produce a result.
    #[error("scorer unavailable: {0}")]
    Unavailable(String),
}

/// Produces a compound polarity score in `[-1.0, 1.0]` for a text.
pub trait PolarityScorer {
    fn compound(&self, text: &str) -> Result<f64, ScoringError>;
}

impl<F> PolarityScorer for F
where
    F: Fn(&str) -> Result<f64, ScoringError>,
{
    fn compound(&self, text: &str) -> Result<f64, ScoringError> {
        self(text)
    }
}

/// Static lexicon analyzer with booster, negation, contrast, capitalization
/// and punctuation rules.
#[derive(Debug, Clone, Copy)]
pub struct LexiconAnalyzer {
    lexicon: &'static Lexicon,
}

impl Default for LexiconAnalyzer {
    fn default() -> Self {
        Self {
            lexicon: Lexicon::shared(),
        }
    }
}

impl PolarityScorer for LexiconAnalyzer {
    fn compound(&self, text: &str) -> Result<f64, ScoringError> {
        let score = self.polarity(text);
        if score.is_finite() {
            Ok(score)
        } else {
            Err(ScoringError::NonFiniteScore { score })
        }
    }
}

impl LexiconAnalyzer {
    /// Compound score without the finiteness check.
    pub fn polarity(&self, text: &str) -> f64 {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return 0.0;
        }
        let caps_differ = caps_differ(&tokens);
        let lowered: Vec<String> = tokens.iter().map(|token| token.to_lowercase()).collect();

        let mut valences = vec![0.0; tokens.len()];
        for (index, word) in lowered.iter().enumerate() {
            valences[index] = self.token_valence(index, word, &tokens, &lowered, caps_differ);
        }
        apply_but_contrast(&lowered, &mut valences);

        let mut sum: f64 = valences.iter().sum();
        let emphasis = punctuation_emphasis(text);
        if sum > 0.0 {
            sum += emphasis;
        } else if sum < 0.0 {
            sum -= emphasis;
        }
        normalize(sum)
    }

    fn token_valence(
        &self,
        index: usize,
        word: &str,
        tokens: &[&str],
        lowered: &[String],
        caps_differ: bool,
    ) -> f64 {
        if self.lexicon.booster(word).is_some() {
            return 0.0;
        }
        let Some(mut valence) = self.lexicon.valence(word) else {
            return 0.0;
        };
        if caps_differ && is_all_caps(tokens[index]) {
            valence += CAPS_INCREMENT.copysign(valence);
        }

        let mut negations = 0;
        for distance in 1..=NEGATION_WINDOW.min(index) {
            let prior = lowered[index - distance].as_str();
            if self.lexicon.valence(prior).is_some() {
                continue;
            }
            if let Some(scalar) = self.lexicon.booster(prior) {
                let mut scalar = if valence < 0.0 { -scalar } else { scalar };
                if caps_differ && is_all_caps(tokens[index - distance]) {
                    scalar += CAPS_INCREMENT.copysign(valence);
                }
                valence += scalar * distance_damping(distance);
            }
            if self.lexicon.is_negation(prior) {
                negations += 1;
            }
        }
        valence * NEGATION_SCALAR.powi(negations)
    }
}

fn tokenize(text: &str) -> Vec<&str> {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| {
        Regex::new(r"[\p{L}\p{N}]+(?:['’][\p{L}\p{N}]+)*").expect("token regex must compile")
    })
    .find_iter(text)
    .map(|found| found.as_str())
    .collect()
}

fn is_all_caps(token: &str) -> bool {
    token.chars().any(char::is_alphabetic) && !token.chars().any(char::is_lowercase)
}

fn caps_differ(tokens: &[&str]) -> bool {
    let caps = tokens.iter().filter(|token| is_all_caps(token)).count();
    caps > 0 && caps < tokens.len()
}

fn distance_damping(distance: usize) -> f64 {
    match distance {
        1 => 1.0,
        2 => 0.95,
        _ => 0.9,
    }
}

fn apply_but_contrast(lowered: &[String], valences: &mut [f64]) {
    let Some(pivot) = lowered.iter().position(|word| word == "but") else {
        return;
    };
    for (index, valence) in valences.iter_mut().enumerate() {
        if index < pivot {
            *valence *= BEFORE_BUT_WEIGHT;
        } else if index > pivot {
            *valence *= AFTER_BUT_WEIGHT;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    let questions = text.matches('?').count();
    let question_emphasis = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_INCREMENT,
        _ => MAX_QUESTION_EMPHASIS,
    };
    exclamations as f64 * EXCLAMATION_INCREMENT + question_emphasis
}

fn normalize(sum: f64) -> f64 {
    (sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
}
