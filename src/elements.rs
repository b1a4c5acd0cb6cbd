//! Chain keyspace computation and per-length slots.
//!
//! Wraps each filtered [`Chain`] with its keyspace size and a running
//! local cursor (`ElementChain`), and groups the chains for one output
//! length into a [`LengthSlot`], sorted by keyspace ascending with an
//! explicit generation-order tie-break.

use std::cmp::Ordering;

use crate::chain::Chain;
use crate::keyspace::Count;
use crate::words::WordTable;

/// A filtered chain paired with its keyspace size and local cursor.
#[derive(Debug, Clone)]
pub struct ElementChain {
    pub chain: Chain,
    /// `ks_cnt(C) = Π |B_{p_i}|`, computed once and frozen.
    pub ks_cnt: Count,
    /// `ks_pos(C) ∈ [0, ks_cnt(C)]`, advanced monotonically by the engine.
    pub ks_pos: Count,
}

impl ElementChain {
    fn new(chain: Chain, words: &WordTable) -> Self {
        let mut ks_cnt = Count::from_u64(1);
        for &p in &chain.parts {
            ks_cnt = ks_cnt.mul_u64(words.bucket(p).len() as u64);
        }
        ElementChain {
            chain,
            ks_cnt,
            ks_pos: Count::zero(),
        }
    }

    /// Remaining, un-enumerated keyspace: `ks_cnt - ks_pos`.
    pub fn remaining(&self) -> Count {
        self.ks_cnt.sub(&self.ks_pos)
    }

    /// `true` once `ks_pos == ks_cnt` — this chain is fully drained.
    pub fn is_exhausted(&self) -> bool {
        self.ks_pos == self.ks_cnt
    }
}

/// One output length's chains, sorted by keyspace ascending, plus the
/// index of the chain currently being drawn from.
#[derive(Debug, Clone, Default)]
pub struct LengthSlot {
    pub chains: Vec<ElementChain>,
    pub elems_pos: usize,
}

impl LengthSlot {
    /// Build a slot for output length `n`: generate every composition,
    /// filter against `words` and the element-count bounds, compute
    /// keyspaces, and sort ascending with generation order as tie-break.
    pub fn build(n: usize, words: &WordTable, elem_cnt_min: usize, elem_cnt_max: usize) -> Self {
        let chains = crate::chain::generate_chains(n);
        let chains = crate::filter::filter_chains(chains, words, elem_cnt_min, elem_cnt_max);
        let mut elements: Vec<ElementChain> = chains
            .into_iter()
            .map(|c| ElementChain::new(c, words))
            .collect();

        // Three-way compare on (ks_cnt, generation_index) keeps ties
        // deterministic across runs.
        elements.sort_by(|a, b| {
            compare_keyspace(&a.ks_cnt, &b.ks_cnt)
                .then_with(|| a.chain.generation_index.cmp(&b.chain.generation_index))
        });

        LengthSlot {
            chains: elements,
            elems_pos: 0,
        }
    }

    /// Total keyspace across every chain in this slot.
    pub fn total_ks_cnt(&self) -> Count {
        self.chains
            .iter()
            .fold(Count::zero(), |acc, e| acc.add(&e.ks_cnt))
    }

    /// The chain currently being drawn from, or `None` once exhausted.
    pub fn current(&self) -> Option<&ElementChain> {
        self.chains.get(self.elems_pos)
    }

    /// Mutable access to the chain currently being drawn from.
    pub fn current_mut(&mut self) -> Option<&mut ElementChain> {
        self.chains.get_mut(self.elems_pos)
    }
}

/// Three-way compare on keyspace size, exposed for callers that want an
/// explicit comparator without going through `Ord` operator sugar.
pub fn compare_keyspace(a: &Count, b: &Count) -> Ordering {
    a.cmp_count(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_sorts_by_keyspace_ascending() {
        let mut words = WordTable::new();
        words.insert(b"a");
        words.insert(b"bc");
        // n=3, elem bounds 2..=2: (1,2) ks=1, (2,1) ks=1 — tie broken by
        // generation order, which lists (1,2) before (2,1).
        let slot = LengthSlot::build(3, &words, 2, 2);
        let parts: Vec<Vec<usize>> = slot.chains.iter().map(|e| e.chain.parts.clone()).collect();
        assert_eq!(parts, vec![vec![1, 2], vec![2, 1]]);
    }

    #[test]
    fn total_ks_cnt_sums_chain_keyspaces() {
        let mut words = WordTable::new();
        words.insert(b"a");
        words.insert(b"b");
        words.insert(b"c");
        // n=2: only chain is (1,1), ks_cnt = 3*3 = 9.
        let slot = LengthSlot::build(2, &words, 1, 8);
        assert_eq!(slot.total_ks_cnt(), Count::from_u64(9));
    }

    #[test]
    fn empty_buckets_yield_smaller_keyspace_chain_first() {
        let mut words = WordTable::new();
        for w in ["a", "b", "c", "d", "e"] {
            words.insert(w.as_bytes());
        }
        words.insert(b"xy"); // one length-2 word
        // n=2: (2) ks=1, (1,1) ks=25. (2) should sort first.
        let slot = LengthSlot::build(2, &words, 1, 8);
        assert_eq!(slot.chains[0].chain.parts, vec![2]);
        assert_eq!(slot.chains[0].ks_cnt, Count::from_u64(1));
        assert_eq!(slot.chains[1].chain.parts, vec![1, 1]);
        assert_eq!(slot.chains[1].ks_cnt, Count::from_u64(25));
    }
}
