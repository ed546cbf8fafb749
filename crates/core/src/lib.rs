//! Core types for the bank chat engine
//!
//! This crate provides the types shared across all other crates:
//! - Corpus rows (`Example`) and per-request match results
//! - Entity annotation parsing
//! - Extracted entity values
//! - Per-user fact records and conversation history
//! - Intent display metadata

pub mod annotation;
pub mod entities;
pub mod example;
pub mod facts;
pub mod intent;

pub use annotation::{annotation_pairs, keys};
pub use entities::ExtractedEntities;
pub use example::{Example, MatchResult};
pub use facts::{ConversationTurn, UserFactRecord};
pub use intent::{color_for_intent, DEFAULT_INTENT_COLOR, OUT_OF_SCOPE};
