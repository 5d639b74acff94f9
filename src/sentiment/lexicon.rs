//! Static valence tables for the rule-based analyzer.
//!
//! Word valences use a -4..=+4 scale. Tables are plain slices so the lexicon
//! is compiled into the binary and never changes at runtime; bump
//! [`LEXICON_VERSION`] whenever an entry changes.
//!
//! Coverage is limited to a compact table of general and product-review words.
//! Anything outside the tables scores 0, so unusual phrasing falls into the
//! Neutral band.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Version of the static tables below.
pub const LEXICON_VERSION: u32 = 2;

/// Scalar added or removed by an intensifying booster word.
pub const BOOSTER_INCREMENT: f64 = 0.293;
/// Scalar applied by a dampening booster word.
pub const BOOSTER_DECREMENT: f64 = -0.293;

const VALENCES: &[(&str, f64)] = &[
    // Strong positive.
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("best", 3.2),
    ("brilliant", 2.8),
    ("excellent", 2.7),
    ("exceptional", 2.6),
    ("fantastic", 2.6),
    ("flawless", 2.3),
    ("great", 3.1),
    ("incredible", 2.6),
    ("love", 3.2),
    ("loved", 2.9),
    ("loves", 2.7),
    ("magnificent", 3.0),
    ("outstanding", 3.0),
    ("perfect", 2.7),
    ("superb", 3.1),
    ("wonderful", 2.7),
    ("delighted", 2.8),
    ("thrilled", 2.7),
    // Moderate positive.
    ("affordable", 1.4),
    ("beautiful", 2.9),
    ("better", 1.9),
    ("comfortable", 1.5),
    ("convenient", 1.5),
    ("cool", 1.3),
    ("durable", 1.3),
    ("easy", 1.9),
    ("effective", 2.1),
    ("efficient", 1.8),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("favorite", 2.0),
    ("friendly", 2.2),
    ("glad", 2.0),
    ("good", 1.9),
    ("happy", 2.7),
    ("helpful", 1.8),
    ("impressed", 2.1),
    ("impressive", 2.3),
    ("gorgeous", 3.0),
    ("handy", 1.5),
    ("sleek", 1.4),
    ("like", 1.5),
    ("liked", 1.8),
    ("lovely", 2.8),
    ("nice", 1.8),
    ("pleased", 1.9),
    ("pleasant", 2.3),
    ("quality", 1.1),
    ("recommend", 1.5),
    ("recommended", 1.5),
    ("reliable", 1.9),
    ("satisfied", 1.8),
    ("smooth", 1.2),
    ("solid", 1.3),
    ("sturdy", 1.2),
    ("super", 2.9),
    ("thank", 1.5),
    ("thanks", 1.9),
    ("useful", 1.9),
    ("value", 1.0),
    ("well", 1.1),
    ("worth", 0.9),
    ("works", 0.9),
    ("win", 2.8),
    ("yes", 1.7),
    // Mild negative.
    ("annoying", -1.7),
    ("cheap", -0.8),
    ("complaint", -1.5),
    ("confusing", -1.3),
    ("damaged", -1.9),
    ("defective", -1.9),
    ("difficult", -1.5),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("dislike", -1.6),
    ("expensive", -0.9),
    ("fail", -2.5),
    ("failed", -2.3),
    ("faulty", -1.8),
    ("flimsy", -1.4),
    ("frustrated", -2.0),
    ("frustrating", -1.9),
    ("issue", -0.7),
    ("issues", -0.8),
    ("late", -0.8),
    ("leak", -1.4),
    ("leaking", -1.5),
    ("mediocre", -1.2),
    ("missing", -1.2),
    ("noisy", -0.9),
    ("overpriced", -1.6),
    ("problem", -1.7),
    ("problems", -1.7),
    ("sad", -2.1),
    ("slow", -0.9),
    ("sorry", -0.3),
    ("unhappy", -1.8),
    ("unreliable", -1.6),
    ("unfortunately", -1.4),
    ("weak", -1.2),
    ("wrong", -2.1),
    // Product failures.
    ("cracked", -1.6),
    ("dead", -3.3),
    ("dented", -1.1),
    ("malfunction", -2.0),
    ("malfunctioned", -2.0),
    ("overheats", -1.5),
    ("overheated", -1.5),
    ("refund", -0.9),
    ("returned", -0.9),
    ("rusted", -1.4),
    ("stopped", -1.2),
    ("stops", -1.0),
    ("unusable", -2.2),
    ("wobbly", -0.9),
    // Strong negative.
    ("angry", -2.3),
    ("awful", -2.0),
    ("bad", -2.5),
    ("broke", -1.8),
    ("broken", -2.1),
    ("crap", -1.6),
    ("disaster", -3.1),
    ("disgusting", -2.4),
    ("dreadful", -2.7),
    ("garbage", -2.1),
    ("hate", -2.7),
    ("hated", -3.2),
    ("horrible", -2.5),
    ("junk", -1.7),
    ("nightmare", -2.7),
    ("pathetic", -2.8),
    ("poor", -2.1),
    ("rubbish", -2.1),
    ("scam", -2.5),
    ("terrible", -2.5),
    ("trash", -1.8),
    ("useless", -1.8),
    ("waste", -1.8),
    ("worse", -2.1),
    ("worst", -3.1),
    ("worthless", -1.9),
];

const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", BOOSTER_INCREMENT),
    ("amazingly", BOOSTER_INCREMENT),
    ("completely", BOOSTER_INCREMENT),
    ("deeply", BOOSTER_INCREMENT),
    ("entirely", BOOSTER_INCREMENT),
    ("especially", BOOSTER_INCREMENT),
    ("exceptionally", BOOSTER_INCREMENT),
    ("extremely", BOOSTER_INCREMENT),
    ("fully", BOOSTER_INCREMENT),
    ("greatly", BOOSTER_INCREMENT),
    ("highly", BOOSTER_INCREMENT),
    ("hugely", BOOSTER_INCREMENT),
    ("incredibly", BOOSTER_INCREMENT),
    ("most", BOOSTER_INCREMENT),
    ("particularly", BOOSTER_INCREMENT),
    ("quite", BOOSTER_INCREMENT),
    ("really", BOOSTER_INCREMENT),
    ("remarkably", BOOSTER_INCREMENT),
    ("so", BOOSTER_INCREMENT),
    ("thoroughly", BOOSTER_INCREMENT),
    ("totally", BOOSTER_INCREMENT),
    ("truly", BOOSTER_INCREMENT),
    ("utterly", BOOSTER_INCREMENT),
    ("very", BOOSTER_INCREMENT),
    ("almost", BOOSTER_DECREMENT),
    ("barely", BOOSTER_DECREMENT),
    ("hardly", BOOSTER_DECREMENT),
    ("kinda", BOOSTER_DECREMENT),
    ("less", BOOSTER_DECREMENT),
    ("marginally", BOOSTER_DECREMENT),
    ("partly", BOOSTER_DECREMENT),
    ("scarcely", BOOSTER_DECREMENT),
    ("slightly", BOOSTER_DECREMENT),
    ("somewhat", BOOSTER_DECREMENT),
];

const NEGATIONS: &[&str] = &[
    "aint", "ain't", "arent", "aren't", "cannot", "cant", "can't", "couldnt", "couldn't",
    "didnt", "didn't", "doesnt", "doesn't", "dont", "don't", "hasnt", "hasn't", "havent",
    "haven't", "isnt", "isn't", "neither", "never", "no", "nobody", "none", "nor", "not",
    "nothing", "nowhere", "shouldnt", "shouldn't", "wasnt", "wasn't", "werent", "weren't",
    "without", "wont", "won't", "wouldnt", "wouldn't",
];

/// Read-only view over the static tables.
#[derive(Debug)]
pub struct Lexicon {
    valences: HashMap<&'static str, f64>,
    boosters: HashMap<&'static str, f64>,
    negations: HashSet<&'static str>,
}

impl Lexicon {
    /// Shared instance built on first use.
    pub fn shared() -> &'static Lexicon {
        static LEXICON: OnceLock<Lexicon> = OnceLock::new();
        LEXICON.get_or_init(|| Lexicon {
            valences: VALENCES.iter().copied().collect(),
            boosters: BOOSTERS.iter().copied().collect(),
            negations: NEGATIONS.iter().copied().collect(),
        })
    }

    /// Valence of a lowercase word, if it carries sentiment.
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.valences.get(word).copied()
    }

    /// Booster scalar of a lowercase word, if it intensifies or dampens.
    pub fn booster(&self, word: &str) -> Option<f64> {
        self.boosters.get(word).copied()
    }

    /// Whether a lowercase word negates the sentiment that follows it.
    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word) || word.ends_with("n't")
    }

    /// Number of words with a valence.
    pub fn len(&self) -> usize {
        self.valences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }
}
