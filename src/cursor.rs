//! Global cursor and resumption (`skip` / `limit`).
//!
//! `total_ks_pos` walks `[0, total_ks_cnt)` across every chain of every
//! scheduled length. `skip` suppresses emission below a threshold without
//! changing which candidates are *visited*; `limit` caps the effective
//! total.

use crate::error::PpError;
use crate::keyspace::Count;

/// The global enumeration cursor.
#[derive(Debug, Clone)]
pub struct Cursor {
    pub total_ks_pos: Count,
    pub total_ks_cnt: Count,
    pub skip: Count,
}

impl Cursor {
    /// Validate `skip`/`limit` against `total_ks_cnt` and build a
    /// `Cursor` whose `total_ks_cnt` has been narrowed to `skip + limit`
    /// when `limit` is nonzero. Takes the inclusive interpretation of the
    /// `skip + limit <= total_ks_cnt` boundary.
    pub fn new(total_ks_cnt: Count, skip: Count, limit: Count) -> Result<Self, PpError> {
        if !skip.is_zero() && skip.cmp_count(&total_ks_cnt) == std::cmp::Ordering::Greater {
            return Err(PpError::SkipExceedsKeyspace {
                skip: skip.to_string(),
                total: total_ks_cnt.to_string(),
            });
        }

        let effective_total = if limit.is_zero() {
            total_ks_cnt
        } else {
            if limit.cmp_count(&total_ks_cnt) == std::cmp::Ordering::Greater {
                return Err(PpError::LimitExceedsKeyspace {
                    limit: limit.to_string(),
                    total: total_ks_cnt.to_string(),
                });
            }
            let combined = skip.add(&limit);
            if combined.cmp_count(&total_ks_cnt) == std::cmp::Ordering::Greater {
                return Err(PpError::SkipPlusLimitExceedsKeyspace {
                    skip: skip.to_string(),
                    limit: limit.to_string(),
                    total: total_ks_cnt.to_string(),
                });
            }
            combined
        };

        Ok(Cursor {
            total_ks_pos: Count::zero(),
            total_ks_cnt: effective_total,
            skip,
        })
    }

    /// `true` while the enumeration loop should keep running.
    pub fn is_active(&self) -> bool {
        self.total_ks_pos.cmp_count(&self.total_ks_cnt) == std::cmp::Ordering::Less
    }

    /// Remaining candidates to visit across all chains: `total_ks_cnt -
    /// total_ks_pos`.
    pub fn remaining(&self) -> Count {
        self.total_ks_cnt.sub(&self.total_ks_pos)
    }

    /// `true` if a candidate at the current `total_ks_pos` should be
    /// emitted (i.e. `total_ks_pos >= skip`).
    pub fn should_emit(&self) -> bool {
        self.total_ks_pos.cmp_count(&self.skip) != std::cmp::Ordering::Less
    }

    /// Advance the global cursor by one visited candidate.
    pub fn advance_one(&mut self) {
        self.total_ks_pos.add_assign(&Count::from_u64(1));
    }
}
