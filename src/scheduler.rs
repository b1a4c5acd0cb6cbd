//! Length scheduler: ordering output lengths by priority.
//!
//! `LengthOrder` decides which output length the enumeration loop visits
//! next within a round. The priority for length `n` is either the
//! wordlist-measured word count (`--wl-dist-len`) or the built-in
//! reference distribution (`config::default_length_priority`), compared
//! with a proper three-way ordering so ties stay deterministic across
//! runs.

use crate::config::default_length_priority;
use crate::words::WordTable;

/// One output length's scheduling priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthPriority {
    pub len: usize,
    pub priority: u64,
}

/// Lengths `[pw_min, pw_max]` ordered by ascending priority, ties broken
/// by ascending length (stable with respect to the natural `pw_min..=
/// pw_max` iteration order, since `Vec::sort_by` is stable).
#[derive(Debug, Clone)]
pub struct LengthOrder {
    order: Vec<LengthPriority>,
}

impl LengthOrder {
    /// Build the schedule for `[pw_min, pw_max]`. When `wl_dist_len` is
    /// `true`, priority is `words.bucket(len).len()`; otherwise it is
    /// `config::default_length_priority(len)`.
    pub fn build(pw_min: usize, pw_max: usize, words: &WordTable, wl_dist_len: bool) -> Self {
        let mut order: Vec<LengthPriority> = (pw_min..=pw_max)
            .map(|len| {
                let priority = if wl_dist_len {
                    words.bucket(len).len() as u64
                } else {
                    default_length_priority(len)
                };
                LengthPriority { len, priority }
            })
            .collect();

        order.sort_by(|a, b| a.priority.cmp(&b.priority));
        LengthOrder { order }
    }

    /// Iterate the schedule in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &LengthPriority> {
        self.order.iter()
    }
}
