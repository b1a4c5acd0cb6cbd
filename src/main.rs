//! Binary entry point for the `pp` command-line tool.
//!
//! Reads a wordlist, validates parameters, and either prints the total
//! keyspace or streams candidates to an output sink. All enumeration
//! logic itself lives in the library crate so it can be unit-tested
//! without a process boundary.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use princeproc::cli::Args;
use princeproc::{Engine, EngineParams, LineWriter, WordTable};

/// On Windows, standard streams default to text mode, which would
/// translate `\n` on write. A no-op on Unix, where this crate's `\n`
/// terminators are already byte-exact.
#[cfg(windows)]
fn set_binary_mode() {
    // No portable, dependency-free way to flip a standard handle to binary
    // mode without an extra platform crate; writes already use explicit
    // `\n` bytes, so this is a placeholder for that per-OS shim.
}

#[cfg(not(windows))]
fn set_binary_mode() {}

fn load_words(input_file: Option<&Path>) -> Result<WordTable> {
    let mut words = WordTable::new();
    match input_file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open input file {}", path.display()))?;
            words.load(BufReader::new(file))?;
        }
        None => {
            let stdin = io::stdin();
            words.load(stdin.lock())?;
        }
    }
    Ok(words)
}

fn open_output(output_file: Option<&Path>) -> Result<Box<dyn Write>> {
    match output_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

fn run(args: Args) -> Result<i32> {
    set_binary_mode();

    let params = match EngineParams::validate(
        args.pw_min as i64,
        args.pw_max as i64,
        args.elem_cnt_min as i64,
        args.elem_cnt_max as i64,
        args.wl_dist_len,
    ) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{e}");
            return Ok(1);
        }
    };

    let words = load_words(args.input_file.as_deref())?;
    let mut engine = Engine::new(words, params);
    eprintln!(
        "loaded {} words across lengths {}..={}",
        engine.total_words_cnt(),
        args.pw_min,
        args.pw_max
    );

    if args.keyspace {
        println!("{}", engine.total_ks_cnt());
        return Ok(0);
    }

    let mut cursor = match engine.cursor(args.skip, args.limit) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            return Ok(1);
        }
    };

    let sink = open_output(args.output_file.as_deref())?;
    let mut writer = LineWriter::new(sink);

    if let Err(e) = engine.run(&mut cursor, &mut writer) {
        eprintln!("{e}");
        return Ok(1);
    }

    Ok(0)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let exit_code = run(args)?;
    std::process::exit(exit_code);
}
