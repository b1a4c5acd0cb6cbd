//! Candidate materialization: mixed-radix decoding.
//!
//! Given a chain `C = (p_1 .. p_m)` and a local position `p < ks_cnt(C)`,
//! decodes `p` against the part-length radixes to pick one word per part
//! and concatenates their bytes.

use crate::chain::Chain;
use crate::keyspace::Count;
use crate::words::WordTable;

/// Materialize the candidate for `chain` at local position `local_pos`,
/// appending its bytes (without a trailing newline) to `out`.
///
/// For each part `p_i` in order: `digit = local_pos mod |B_{p_i}|`;
/// append `B_{p_i}[digit]`; `local_pos = local_pos div |B_{p_i}|`. This is
/// little-endian mixed radix over the part sequence.
pub fn materialize(chain: &Chain, local_pos: &Count, words: &WordTable, out: &mut Vec<u8>) {
    let mut pos = local_pos.clone();
    for &part_len in &chain.parts {
        let bucket = words.bucket(part_len);
        let (quotient, digit) = pos.div_rem_u64(bucket.len() as u64);
        out.extend_from_slice(bucket.word(digit));
        pos = quotient;
    }
}
