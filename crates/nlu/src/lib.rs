//! Rule-based NLU pipeline
//!
//! Resolves a free-text utterance against the corpus in three stages
//! (exact normalized match, numeric-entity match, token overlap), extracts
//! structured entities from the winning row's annotation and the raw text,
//! and synthesizes a reply when the row has no canned response.
//!
//! Every function here is a pure, bounded-time scan over the supplied
//! corpus snapshot; all cross-turn state lives elsewhere.

pub mod extract;
pub mod matcher;
pub mod normalize;
pub mod synthesize;

pub use extract::extract;
pub use matcher::{digit_runs, first_digit_run, resolve};
pub use normalize::normalize;
pub use synthesize::{synthesize, synthesize_with};
