//! Chain filtering.
//!
//! A freshly generated chain (see `chain.rs`) is dropped if it references
//! a part-length with no loaded words, or if its element count falls
//! outside `[elem_cnt_min, elem_cnt_max]`.

use crate::chain::Chain;
use crate::words::WordTable;

/// `true` if every part of `chain` indexes a nonempty bucket in `words`.
pub fn has_nonempty_buckets(chain: &Chain, words: &WordTable) -> bool {
    chain.parts.iter().all(|&p| !words.bucket(p).is_empty())
}

/// `true` if `chain`'s element count lies in `[elem_cnt_min, elem_cnt_max]`.
pub fn has_valid_elem_count(chain: &Chain, elem_cnt_min: usize, elem_cnt_max: usize) -> bool {
    let cnt = chain.elem_count();
    cnt >= elem_cnt_min && cnt <= elem_cnt_max
}

/// Keep only chains that pass both filters, preserving generation order.
pub fn filter_chains(
    chains: Vec<Chain>,
    words: &WordTable,
    elem_cnt_min: usize,
    elem_cnt_max: usize,
) -> Vec<Chain> {
    chains
        .into_iter()
        .filter(|c| has_nonempty_buckets(c, words))
        .filter(|c| has_valid_elem_count(c, elem_cnt_min, elem_cnt_max))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::generate_chains;

    #[test]
    fn drops_chains_referencing_empty_buckets() {
        let mut words = WordTable::new();
        words.insert(b"ab");
        words.insert(b"cd");
        // n=2: chains are (2) and (1,1); bucket 1 is empty.
        let chains = generate_chains(2);
        let kept = filter_chains(chains, &words, 1, 8);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].parts, vec![2]);
    }

    #[test]
    fn drops_chains_outside_elem_count_bounds() {
        let mut words = WordTable::new();
        words.insert(b"a");
        words.insert(b"bc");
        // n=3: (3) [no len-3 words => already dropped], (1,2), (2,1), (1,1,1)
        let chains = generate_chains(3);
        let kept = filter_chains(chains, &words, 2, 2);
        let parts: Vec<Vec<usize>> = kept.into_iter().map(|c| c.parts).collect();
        assert_eq!(parts, vec![vec![1, 2], vec![2, 1]]);
    }
}
