//! Command-line argument parsing.
//!
//! A `clap`-derived `Args` struct covering every flag the binary accepts.

use std::path::PathBuf;

use clap::Parser;

use crate::config;
use crate::keyspace::Count;

/// PRINCE (PRobability INfinite Chained Elements) password candidate generator.
#[derive(Parser, Debug)]
#[command(name = "pp", version = env!("CARGO_PKG_VERSION"), about)]
pub struct Args {
    /// Print the total candidate count instead of generating candidates.
    #[arg(long)]
    pub keyspace: bool,

    /// Minimum output length of the generated candidates.
    #[arg(long, default_value_t = config::PW_MIN_DEFAULT)]
    pub pw_min: usize,

    /// Maximum output length of the generated candidates.
    #[arg(long, default_value_t = config::PW_MAX_DEFAULT)]
    pub pw_max: usize,

    /// Minimum number of elements (input words) per candidate.
    #[arg(long, default_value_t = config::ELEM_CNT_MIN_DEFAULT)]
    pub elem_cnt_min: usize,

    /// Maximum number of elements (input words) per candidate.
    #[arg(long, default_value_t = config::ELEM_CNT_MAX_DEFAULT)]
    pub elem_cnt_max: usize,

    /// Derive the output length priority from the loaded wordlist's
    /// measured length distribution instead of the built-in reference
    /// distribution.
    #[arg(long)]
    pub wl_dist_len: bool,

    /// Skip the first N candidates of the ordered keyspace.
    #[arg(long, default_value = "0")]
    pub skip: Count,

    /// Emit at most N candidates after `--skip`.
    #[arg(long, default_value = "0")]
    pub limit: Count,

    /// Write candidates to this file instead of standard output.
    #[arg(long, value_name = "PATH")]
    pub output_file: Option<PathBuf>,

    /// Read the wordlist from this file instead of standard input.
    #[arg(long, value_name = "PATH")]
    pub input_file: Option<PathBuf>,
}
