//! Chat turn orchestration
//!
//! Ties the pipeline together: normalize → match → extract → synthesize →
//! corpus self-update, plus the per-user fact store the collaborator layer
//! consumes. No error here aborts a turn; the worst observable failure is
//! "the corpus did not grow" or a generic fallback reply.

pub mod engine;
pub mod facts;

pub use engine::{AccountProfile, ChatEngine, TurnOutcome};
pub use facts::{InMemoryFactStore, JsonFactStore, UserFactStore};

use thiserror::Error;

/// Agent errors
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("corpus error: {0}")]
    Corpus(#[from] bankbot_corpus::CorpusError),

    #[error("fact store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("fact store encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}
