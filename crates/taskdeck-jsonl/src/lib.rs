//! Resilient JSONL (JSON Lines) reading and atomic writing.
//!
//! This library provides the persistence primitives used by taskdeck:
//! line-oriented JSON parsing that survives malformed records, and
//! crash-safe file writes using the temp-file-then-rename pattern.

#![forbid(unsafe_code)]

pub mod atomic;
pub mod error;
pub mod reader;
pub mod warning;
pub mod writer;

pub use atomic::{write_jsonl_atomic, write_jsonl_atomic_iter};
pub use error::{Error, Result};
pub use reader::read_jsonl_resilient;
pub use warning::Warning;
pub use writer::JsonlWriter;
