//! A PRINCE-style chained-wordlist password candidate generator.

pub mod chain;
pub mod cli;
pub mod config;
pub mod cursor;
pub mod elements;
pub mod engine;
pub mod error;
pub mod filter;
pub mod keyspace;
pub mod materializer;
pub mod scheduler;
pub mod words;
pub mod writer;

// ─────────────────────────────────────────────────────────────────────────────
// Top-level convenience re-exports for the most common API entry points.
// ─────────────────────────────────────────────────────────────────────────────

/// The arbitrary-precision integer used for keyspaces, cursors, skip/limit.
pub use keyspace::Count;

/// Per-length-bucket word storage.
pub use words::WordTable;

/// Validated engine construction parameters.
pub use engine::EngineParams;

/// The enumeration engine.
pub use engine::Engine;

/// The resumable global cursor.
pub use cursor::Cursor;

/// The library's error type.
pub use error::PpError;

/// Buffered line-oriented output writer.
pub use writer::LineWriter;

