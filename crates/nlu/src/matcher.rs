//! Three-stage utterance resolution
//!
//! The stages trade precision for recall: exact normalized match avoids
//! false positives, the numeric-entity stage lets an account-number or
//! amount utterance bypass phrasing entirely, and token overlap guarantees
//! some response whenever any vocabulary is shared. Earlier stages are
//! authoritative; a later stage is never consulted once one succeeds.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use bankbot_core::{annotation_pairs, keys, Example, MatchResult};

use crate::normalize::normalize;

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// All maximal digit runs in a text, in order.
pub fn digit_runs(text: &str) -> Vec<&str> {
    DIGIT_RUN.find_iter(text).map(|m| m.as_str()).collect()
}

/// First maximal digit run in a text, if any.
pub fn first_digit_run(text: &str) -> Option<&str> {
    DIGIT_RUN.find(text).map(|m| m.as_str())
}

/// Resolve an utterance to at most one corpus row.
///
/// An empty or whitespace-only utterance short-circuits to `None` without
/// scanning the corpus. Within every stage, ties break to the first row by
/// stored order; that is a hard rule, not an optimization detail.
pub fn resolve(utterance: &str, corpus: &[Example]) -> Option<MatchResult> {
    if utterance.trim().is_empty() {
        return None;
    }

    let utterance_norm = normalize(utterance);

    let row = exact_match(&utterance_norm, corpus)
        .or_else(|| numeric_entity_match(utterance, corpus))
        .or_else(|| token_overlap_match(&utterance_norm, corpus))?;

    tracing::debug!(intent = %row.intent, "utterance resolved");
    Some(MatchResult::from(row))
}

/// Stage 1: first row whose non-empty normalized text equals the
/// normalized utterance.
fn exact_match<'a>(utterance_norm: &str, corpus: &'a [Example]) -> Option<&'a Example> {
    corpus.iter().find(|row| {
        let row_norm = normalize(&row.text);
        !row_norm.is_empty() && row_norm == utterance_norm
    })
}

/// Stage 2: match numeric annotation values against the digits of the raw
/// utterance.
///
/// Only rows whose annotation mentions `ACCOUNT_NUMBER` or `MONEY` are
/// considered. A numeric annotation value matches when it appears verbatim
/// in the utterance, equals the concatenation of all digit runs, or equals
/// any single digit run.
fn numeric_entity_match<'a>(utterance: &str, corpus: &'a [Example]) -> Option<&'a Example> {
    let runs = digit_runs(utterance);
    let concatenated: String = runs.concat();

    for row in corpus {
        let annotation = row.entities.trim();
        if !annotation.contains(keys::ACCOUNT_NUMBER) && !annotation.contains(keys::MONEY) {
            continue;
        }

        for (_, value) in annotation_pairs(annotation) {
            if value.is_empty() || !value.chars().any(|c| c.is_ascii_digit()) {
                continue;
            }
            if utterance.contains(&value)
                || value == concatenated
                || runs.iter().any(|run| *run == value)
            {
                return Some(row);
            }
        }
    }

    None
}

/// Stage 3: largest token-set overlap between the normalized utterance and
/// each row's normalized text.
///
/// A later row must strictly exceed the best score to take over, so the
/// first row wins ties. The score is a raw intersection size, deliberately
/// not normalized by row length; a long row sharing many common tokens can
/// outrank a short specific one.
fn token_overlap_match<'a>(utterance_norm: &str, corpus: &'a [Example]) -> Option<&'a Example> {
    let utterance_tokens: HashSet<&str> = utterance_norm.split_whitespace().collect();

    let mut best: Option<&Example> = None;
    let mut best_score = 0usize;

    for row in corpus {
        let row_norm = normalize(&row.text);
        if row_norm.is_empty() {
            continue;
        }
        let row_tokens: HashSet<&str> = row_norm.split_whitespace().collect();
        let overlap = row_tokens.intersection(&utterance_tokens).count();
        if overlap > best_score {
            best_score = overlap;
            best = Some(row);
        }
    }

    if best_score >= 1 {
        best
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<Example> {
        vec![
            Example::new("check balance", "check_balance", "Sure", ""),
            Example::new(
                "balance of my account",
                "check_balance",
                "",
                "ACCOUNT_NUMBER:123456|MONEY:500",
            ),
            Example::new("loan inquiry details", "loan_inquiry", "We offer loans.", ""),
            Example::new("card block request", "block_card", "Card blocked.", ""),
        ]
    }

    #[test]
    fn test_exact_match_ignores_case_and_punctuation() {
        let result = resolve("Check Balance!", &corpus()).unwrap();
        assert_eq!(result.intent, "check_balance");
        assert_eq!(result.response, "Sure");
    }

    #[test]
    fn test_numeric_entity_match_on_account_number() {
        let result = resolve("balance for 123456", &corpus()).unwrap();
        assert_eq!(result.intent, "check_balance");
        assert_eq!(result.entities, "ACCOUNT_NUMBER:123456|MONEY:500");
    }

    #[test]
    fn test_numeric_entity_match_on_split_digit_runs() {
        // 12 34 56 concatenate to the annotated account number
        let result = resolve("digits 12 34 56 here", &corpus()).unwrap();
        assert_eq!(result.entities, "ACCOUNT_NUMBER:123456|MONEY:500");
    }

    #[test]
    fn test_token_overlap_prefers_larger_intersection() {
        let result = resolve("tell me about loan inquiry", &corpus()).unwrap();
        assert_eq!(result.intent, "loan_inquiry");
    }

    #[test]
    fn test_token_overlap_tie_breaks_to_first_row() {
        let rows = vec![
            Example::new("my card", "card_inquiry", "", ""),
            Example::new("my loan", "loan_inquiry", "", ""),
        ];
        // "my" overlaps both rows equally; the first stored row wins
        let result = resolve("my", &rows).unwrap();
        assert_eq!(result.intent, "card_inquiry");
    }

    #[test]
    fn test_exact_match_beats_overlap() {
        // "check balance" also overlaps the longer balance row; stage 1 wins
        let result = resolve("check balance", &corpus()).unwrap();
        assert_eq!(result.response, "Sure");
    }

    #[test]
    fn test_no_match() {
        assert!(resolve("qwerty zxcvb", &corpus()).is_none());
    }

    #[test]
    fn test_empty_utterance_short_circuits() {
        assert!(resolve("", &corpus()).is_none());
        assert!(resolve("   ", &corpus()).is_none());
    }

    #[test]
    fn test_digit_runs() {
        assert_eq!(digit_runs("send 500 to 123456"), vec!["500", "123456"]);
        assert_eq!(first_digit_run("no digits"), None);
    }
}
