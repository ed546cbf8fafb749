//! Corpus storage
//!
//! An ordered in-memory table of labeled examples backed by an append-only
//! CSV log. Insertion order is the hard first-match tie-break rule for the
//! matcher, so the sequence is never reordered.

pub mod log;
pub mod store;

pub use log::CorpusLog;
pub use store::{AppendOutcome, CorpusStore};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("corpus I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corpus log error: {0}")]
    Csv(#[from] csv::Error),
}
