//! Entity extraction
//!
//! Two passes: explicit values from the matched row's annotation always
//! win; regex fallbacks over the raw utterance fill whatever is still
//! unset. The fallback amount pattern is a superset of the account-number
//! pattern, so a lone 6+ digit number with no annotation fills both fields
//! with the same digits. That duplication is intentional dataset behavior.

use once_cell::sync::Lazy;
use regex::Regex;

use bankbot_core::{annotation_pairs, keys, ExtractedEntities};

static ACCOUNT_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d{6,})\b").unwrap());
static AMOUNT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d+)\b").unwrap());
static PERSON: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b([A-Za-z]{2,})\b").unwrap());

/// Extract entities from an utterance and the matched row's annotation.
pub fn extract(utterance: &str, annotation: &str) -> ExtractedEntities {
    let mut entities = ExtractedEntities::default();

    for (key, value) in annotation_pairs(annotation) {
        if value.is_empty() {
            continue;
        }
        match key.as_str() {
            keys::ACCOUNT_NUMBER => entities.account_number = Some(value),
            keys::MONEY => entities.amount = Some(value),
            keys::PERSON => entities.person = Some(value),
            _ => {}
        }
    }

    if entities.account_number.is_none() {
        if let Some(captures) = ACCOUNT_NUMBER.captures(utterance) {
            entities.account_number = Some(captures[1].to_string());
        }
    }
    if entities.amount.is_none() {
        if let Some(captures) = AMOUNT.captures(utterance) {
            entities.amount = Some(captures[1].to_string());
        }
    }
    if entities.person.is_none() {
        if let Some(captures) = PERSON.captures(utterance) {
            entities.person = Some(captures[1].to_string());
        }
    }

    entities
}
