//! Library-level error type.
//!
//! One variant per parameter-validation check, plus an `Io` variant for
//! output-sink failures. `Display`/`std::error::Error` are implemented by
//! hand rather than derived with `thiserror`.

use std::fmt;

/// Errors the engine can return before or during enumeration.
#[derive(Debug)]
pub enum PpError {
    /// `--pw-min` was not a positive integer.
    PwMinNotPositive { pw_min: i64 },
    /// `--pw-max` was not a positive integer.
    PwMaxNotPositive { pw_max: i64 },
    /// `--elem-cnt-min` was not a positive integer.
    ElemCntMinNotPositive { elem_cnt_min: i64 },
    /// `--elem-cnt-max` was not a positive integer.
    ElemCntMaxNotPositive { elem_cnt_max: i64 },
    /// `--pw-min` exceeded `--pw-max`.
    PwMinGreaterThanMax { pw_min: usize, pw_max: usize },
    /// `--elem-cnt-min` exceeded `--elem-cnt-max`.
    ElemCntMinGreaterThanMax {
        elem_cnt_min: usize,
        elem_cnt_max: usize,
    },
    /// `--pw-min` was below `IN_LEN_MIN`.
    PwMinBelowInLenMin { pw_min: usize, in_len_min: usize },
    /// `--pw-max` exceeded `IN_LEN_MAX`.
    PwMaxAboveInLenMax { pw_max: usize, in_len_max: usize },
    /// `--skip` exceeded the total keyspace.
    SkipExceedsKeyspace { skip: String, total: String },
    /// `--limit` exceeded the total keyspace.
    LimitExceedsKeyspace { limit: String, total: String },
    /// `--skip + --limit` exceeded the total keyspace.
    SkipPlusLimitExceedsKeyspace {
        skip: String,
        limit: String,
        total: String,
    },
    /// A write to the output sink failed.
    Io(std::io::Error),
}

impl fmt::Display for PpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PpError::PwMinNotPositive { pw_min } => {
                write!(f, "Value of --pw-min ({pw_min}) must be greater than 0")
            }
            PpError::PwMaxNotPositive { pw_max } => {
                write!(f, "Value of --pw-max ({pw_max}) must be greater than 0")
            }
            PpError::ElemCntMinNotPositive { elem_cnt_min } => write!(
                f,
                "Value of --elem-cnt-min ({elem_cnt_min}) must be greater than 0"
            ),
            PpError::ElemCntMaxNotPositive { elem_cnt_max } => write!(
                f,
                "Value of --elem-cnt-max ({elem_cnt_max}) must be greater than 0"
            ),
            PpError::PwMinGreaterThanMax { pw_min, pw_max } => write!(
                f,
                "Value of --pw-min ({pw_min}) must be smaller or equal than value of --pw-max ({pw_max})"
            ),
            PpError::ElemCntMinGreaterThanMax {
                elem_cnt_min,
                elem_cnt_max,
            } => write!(
                f,
                "Value of --elem-cnt-min ({elem_cnt_min}) must be smaller or equal than value of --elem-cnt-max ({elem_cnt_max})"
            ),
            PpError::PwMinBelowInLenMin { pw_min, in_len_min } => write!(
                f,
                "Value of --pw-min ({pw_min}) must be greater or equal than {in_len_min}"
            ),
            PpError::PwMaxAboveInLenMax { pw_max, in_len_max } => write!(
                f,
                "Value of --pw-max ({pw_max}) must be smaller or equal than {in_len_max}"
            ),
            PpError::SkipExceedsKeyspace { skip, total } => write!(
                f,
                "Value of --skip ({skip}) must be smaller than total keyspace ({total})"
            ),
            PpError::LimitExceedsKeyspace { limit, total } => write!(
                f,
                "Value of --limit ({limit}) must be smaller than total keyspace ({total})"
            ),
            PpError::SkipPlusLimitExceedsKeyspace { skip, limit, total } => write!(
                f,
                "Value of --skip ({skip}) + --limit ({limit}) must be smaller than total keyspace ({total})"
            ),
            PpError::Io(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for PpError {}

impl From<std::io::Error> for PpError {
    fn from(e: std::io::Error) -> Self {
        PpError::Io(e)
    }
}
