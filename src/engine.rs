//! The enumeration engine: ties word buckets, chain slots, the length
//! scheduler, the global cursor and the materializer together into the
//! round-robin loop that interleaves output lengths, from chain-database
//! construction through the final emitted candidate.

use std::io::Write;

use crate::config::{IN_LEN_MAX, IN_LEN_MIN};
use crate::cursor::Cursor;
use crate::elements::LengthSlot;
use crate::error::PpError;
use crate::keyspace::Count;
use crate::materializer::materialize;
use crate::scheduler::LengthOrder;
use crate::words::WordTable;
use crate::writer::LineWriter;

/// Validated construction parameters for an [`Engine`].
#[derive(Debug, Clone, Copy)]
pub struct EngineParams {
    pub pw_min: usize,
    pub pw_max: usize,
    pub elem_cnt_min: usize,
    pub elem_cnt_max: usize,
    pub wl_dist_len: bool,
}

impl EngineParams {
    /// Validate the length and element-count parameters. Does not touch
    /// `skip`/`limit`, which are checked once the total keyspace is known
    /// (see [`Cursor::new`]).
    pub fn validate(
        pw_min: i64,
        pw_max: i64,
        elem_cnt_min: i64,
        elem_cnt_max: i64,
        wl_dist_len: bool,
    ) -> Result<Self, PpError> {
        if pw_min <= 0 {
            return Err(PpError::PwMinNotPositive { pw_min });
        }
        if pw_max <= 0 {
            return Err(PpError::PwMaxNotPositive { pw_max });
        }
        if elem_cnt_min <= 0 {
            return Err(PpError::ElemCntMinNotPositive { elem_cnt_min });
        }
        if elem_cnt_max <= 0 {
            return Err(PpError::ElemCntMaxNotPositive { elem_cnt_max });
        }

        let pw_min = pw_min as usize;
        let pw_max = pw_max as usize;
        let elem_cnt_min = elem_cnt_min as usize;
        let elem_cnt_max = elem_cnt_max as usize;

        if pw_min > pw_max {
            return Err(PpError::PwMinGreaterThanMax { pw_min, pw_max });
        }
        if elem_cnt_min > elem_cnt_max {
            return Err(PpError::ElemCntMinGreaterThanMax {
                elem_cnt_min,
                elem_cnt_max,
            });
        }
        if pw_min < IN_LEN_MIN {
            return Err(PpError::PwMinBelowInLenMin {
                pw_min,
                in_len_min: IN_LEN_MIN,
            });
        }
        if pw_max > IN_LEN_MAX {
            return Err(PpError::PwMaxAboveInLenMax {
                pw_max,
                in_len_max: IN_LEN_MAX,
            });
        }

        Ok(EngineParams {
            pw_min,
            pw_max,
            elem_cnt_min,
            elem_cnt_max,
            wl_dist_len,
        })
    }
}

/// Owns the per-length chain slots, the length schedule and the word
/// table, and drives enumeration.
pub struct Engine {
    words: WordTable,
    params: EngineParams,
    /// Slots indexed by `len - params.pw_min`.
    slots: Vec<LengthSlot>,
    order: LengthOrder,
    total_ks_cnt: Count,
}

impl Engine {
    /// Build chain slots for every length in `[pw_min, pw_max]`, prune and
    /// rank them, and compute the total keyspace.
    pub fn new(words: WordTable, params: EngineParams) -> Self {
        let slots: Vec<LengthSlot> = (params.pw_min..=params.pw_max)
            .map(|n| LengthSlot::build(n, &words, params.elem_cnt_min, params.elem_cnt_max))
            .collect();

        let total_ks_cnt = slots
            .iter()
            .fold(Count::zero(), |acc, s| acc.add(&s.total_ks_cnt()));

        let order = LengthOrder::build(params.pw_min, params.pw_max, &words, params.wl_dist_len);

        Engine {
            words,
            params,
            slots,
            order,
            total_ks_cnt,
        }
    }

    /// Total keyspace across every scheduled length, before any
    /// `skip`/`limit` narrowing. This is the value `--keyspace` prints.
    pub fn total_ks_cnt(&self) -> Count {
        self.total_ks_cnt.clone()
    }

    /// Sum of loaded word counts across `[pw_min, pw_max]`, a
    /// diagnostic-only aggregate not otherwise consumed by enumeration.
    pub fn total_words_cnt(&self) -> u64 {
        self.words
            .total_words_in_range(self.params.pw_min..=self.params.pw_max)
    }

    /// Build a validated [`Cursor`] for `skip`/`limit` against this
    /// engine's total keyspace.
    pub fn cursor(&self, skip: Count, limit: Count) -> Result<Cursor, PpError> {
        Cursor::new(self.total_ks_cnt(), skip, limit)
    }

    /// Enumerate candidates into `out` under `cursor`'s skip/limit window,
    /// following the round-robin loop across scheduled lengths. Returns
    /// once `cursor` reaches its effective total.
    pub fn run<W: Write>(
        &mut self,
        cursor: &mut Cursor,
        out: &mut LineWriter<W>,
    ) -> Result<(), PpError> {
        // A chain's element count can't exceed its target length `n`, and
        // `n <= pw_max <= IN_LEN_MAX`, so the longest possible candidate is
        // `IN_LEN_MAX` bytes regardless of how large `--elem-cnt-max` is.
        let mut candidate = Vec::with_capacity(IN_LEN_MAX + 1);

        while cursor.is_active() {
            for lp in self.order.iter() {
                let slot_idx = lp.len - self.params.pw_min;
                let slot = &mut self.slots[slot_idx];

                if slot.elems_pos == slot.chains.len() {
                    continue;
                }

                let chain_remaining = {
                    let current = slot.current().expect("elems_pos checked in range above");
                    current.remaining()
                };

                let priority_cap = Count::from_u64(lp.priority);
                let mut iter_max = chain_remaining;
                if iter_max.cmp_count(&priority_cap) == std::cmp::Ordering::Greater {
                    iter_max = priority_cap;
                }
                let global_remaining = cursor.remaining();
                if global_remaining.cmp_count(&iter_max) == std::cmp::Ordering::Less {
                    iter_max = global_remaining;
                }

                let iter_max_u64 = iter_max
                    .to_u64()
                    .expect("iter_max is bounded by a u64 priority or word count");

                let chain = slot.current().expect("checked above").chain.clone();
                let base_pos = slot
                    .current()
                    .expect("checked above")
                    .ks_pos
                    .clone();

                for step in 0..iter_max_u64 {
                    if cursor.should_emit() {
                        let local = base_pos.add(&Count::from_u64(step));
                        candidate.clear();
                        materialize(&chain, &local, &self.words, &mut candidate);
                        out.push_line(&candidate).map_err(PpError::from)?;
                    }
                    cursor.advance_one();
                }

                out.flush_buf().map_err(PpError::from)?;

                let current = slot.current_mut().expect("checked above");
                current.ks_pos.add_assign(&iter_max);
                if current.is_exhausted() {
                    slot.elems_pos += 1;
                }

                if !cursor.is_active() {
                    break;
                }
            }
        }

        out.flush_buf().map_err(PpError::from)
    }
}
