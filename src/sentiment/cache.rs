//! Memoization of labels keyed on the literal review text.

use std::collections::{HashMap, VecDeque};
use std::num::NonZeroUsize;

use super::SentimentLabel;

/// Counters describing cache effectiveness.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

/// Text → label cache, optionally bounded with oldest-first eviction.
#[derive(Debug, Clone, Default)]
pub struct SentimentCache {
    entries: HashMap<String, SentimentLabel>,
    insertion_order: VecDeque<String>,
    capacity: Option<NonZeroUsize>,
    stats: CacheStats,
}

impl SentimentCache {
    /// Cache that never evicts.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Cache holding at most `capacity` texts; `0` means unbounded.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: NonZeroUsize::new(capacity),
            ..Self::default()
        }
    }

    /// Look up a label, recording a hit or a miss.
    pub fn get(&mut self, text: &str) -> Option<SentimentLabel> {
        let found = self.entries.get(text).copied();
        match found {
            Some(_) => self.stats.hits += 1,
            None => self.stats.misses += 1,
        }
        found
    }

    /// Remember the label for `text`, evicting the oldest entry when full.
    pub fn insert(&mut self, text: &str, label: SentimentLabel) {
        if let Some(existing) = self.entries.get_mut(text) {
            *existing = label;
            return;
        }
        if let Some(capacity) = self.capacity {
            while self.entries.len() >= capacity.get() {
                let Some(oldest) = self.insertion_order.pop_front() else {
                    break;
                };
                self.entries.remove(&oldest);
                self.stats.evictions += 1;
            }
        }
        self.entries.insert(text.to_owned(), label);
        self.insertion_order.push_back(text.to_owned());
    }

    pub fn contains(&self, text: &str) -> bool {
        self.entries.contains_key(text)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Configured bound, `None` when unbounded.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity.map(NonZeroUsize::get)
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}
