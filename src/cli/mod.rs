//! Command-line interface: argument parsing and process-boundary glue.
//!
//! Contains no enumeration logic — everything here either parses flags or
//! moves bytes between a stream and the library's `WordTable`/`Engine`.

pub mod args;

pub use args::Args;
