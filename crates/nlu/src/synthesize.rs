//! Reply synthesis
//!
//! Builds the final reply when the matched row has no canned response,
//! falling back through the entity sources in a fixed order.

use once_cell::sync::Lazy;
use regex::Regex;

use bankbot_config::ReplyTemplates;
use bankbot_core::{keys, Example, ExtractedEntities, MatchResult};

use crate::matcher::first_digit_run;

static MONEY_VALUE: Lazy<Regex> = Lazy::new(|| Regex::new(r"MONEY:(\d+)").unwrap());

/// Build the reply for a matched row.
///
/// A non-empty canned response is returned as-is (trimmed). Otherwise, in
/// order: the extracted amount; the `MONEY:` value of the first corpus row
/// pairing the extracted account number with an amount (which also
/// backfills `extracted.amount`, so the append path can persist it); the
/// first digit run in the raw utterance; an empty string, which the caller
/// must treat as "no synthesized content available".
pub fn synthesize(
    matched: &MatchResult,
    extracted: &mut ExtractedEntities,
    utterance: &str,
    corpus: &[Example],
) -> String {
    synthesize_with(matched, extracted, utterance, corpus, &ReplyTemplates::default())
}

/// `synthesize` with caller-supplied reply templates.
pub fn synthesize_with(
    matched: &MatchResult,
    extracted: &mut ExtractedEntities,
    utterance: &str,
    corpus: &[Example],
    templates: &ReplyTemplates,
) -> String {
    let canned = matched.response.trim();
    if !canned.is_empty() {
        return canned.to_string();
    }

    if let Some(amount) = &extracted.amount {
        return templates.balance_reply(amount);
    }

    if let Some(account) = &extracted.account_number {
        if let Some(amount) = paired_money_value(account, corpus) {
            let reply = templates.balance_reply(&amount);
            extracted.amount = Some(amount);
            return reply;
        }
    }

    if let Some(run) = first_digit_run(utterance) {
        return templates.balance_reply(run);
    }

    String::new()
}

/// `MONEY:` digits of the first corpus row, by stored order, that
/// annotates both `ACCOUNT_NUMBER:<account>` and a `MONEY:` value the
/// digit pattern can capture. Rows pairing the account with an
/// uncapturable value are skipped, not terminal.
fn paired_money_value(account: &str, corpus: &[Example]) -> Option<String> {
    let account_tag = format!("{}:{}", keys::ACCOUNT_NUMBER, account);
    let money_prefix = format!("{}:", keys::MONEY);

    corpus
        .iter()
        .filter(|row| row.entities.contains(&account_tag) && row.entities.contains(&money_prefix))
        .find_map(|row| MONEY_VALUE.captures(&row.entities))
        .map(|captures| captures[1].to_string())
}
