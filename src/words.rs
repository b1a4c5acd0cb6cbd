//! Word bucket table.
//!
//! Each bucket holds every loaded word of exactly one length, in
//! insertion order, because order is part of the candidate ordering
//! contract. Buckets grow via `Vec`'s amortized doubling and are frozen
//! once loading finishes.

use crate::config::IN_LEN_MAX;

/// Words of one fixed byte-length, in the order they were loaded.
#[derive(Debug, Default, Clone)]
pub struct WordBucket {
    words: Vec<Box<[u8]>>,
}

impl WordBucket {
    /// Number of words in this bucket.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// `true` if no word of this length was loaded.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The word at zero-based `idx`. Panics if out of range — callers only
    /// ever index with `digit < self.len()` (see `materializer.rs`).
    pub fn word(&self, idx: u64) -> &[u8] {
        &self.words[idx as usize]
    }

    fn push(&mut self, word: &[u8]) {
        self.words.push(word.into());
    }
}

/// Word buckets indexed by length `1..=IN_LEN_MAX` (index 0 is allocated
/// but always empty, keeping lookups a plain array index).
#[derive(Debug, Clone)]
pub struct WordTable {
    buckets: Vec<WordBucket>,
}

impl WordTable {
    /// An empty table with one bucket per length `0..=IN_LEN_MAX` (index 0
    /// unused).
    pub fn new() -> Self {
        WordTable {
            buckets: (0..=IN_LEN_MAX).map(|_| WordBucket::default()).collect(),
        }
    }

    /// The bucket holding words of exactly `len` bytes. Panics if
    /// `len > IN_LEN_MAX` — callers only ever look up lengths already
    /// bounds-checked against `IN_LEN_MAX` (pw_max validation happens
    /// before any lookup).
    pub fn bucket(&self, len: usize) -> &WordBucket {
        &self.buckets[len]
    }

    /// Load one word. Silently discarded if `word.len()` falls outside
    /// `[IN_LEN_MIN, IN_LEN_MAX]`.
    pub fn insert(&mut self, word: &[u8]) {
        let len = word.len();
        if len == 0 || len > IN_LEN_MAX {
            return;
        }
        self.buckets[len].push(word);
    }

    /// Load every newline-delimited word from `reader`. Each line is
    /// stripped of a trailing `\r` and/or `\n`; lines outside
    /// `[IN_LEN_MIN, IN_LEN_MAX]` after stripping are discarded.
    pub fn load(&mut self, reader: impl std::io::BufRead) -> std::io::Result<()> {
        for line in reader.split(b'\n') {
            let mut line = line?;
            while line.last() == Some(&b'\r') || line.last() == Some(&b'\n') {
                line.pop();
            }
            self.insert(&line);
        }
        Ok(())
    }

    /// Sum of `bucket(n).len()` for `n` in `range`, used to compute
    /// `total_words_cnt`, a diagnostic-only aggregate not otherwise
    /// consumed by enumeration.
    pub fn total_words_in_range(&self, range: std::ops::RangeInclusive<usize>) -> u64 {
        range.map(|n| self.bucket(n).len() as u64).sum()
    }
}

impl Default for WordTable {
    fn default() -> Self {
        Self::new()
    }
}
