//! Corpus row and match result types

use serde::{Deserialize, Serialize};

/// One labeled row of the chat corpus.
///
/// `text` and `intent` are mandatory for a usable row. `response` may
/// legitimately be empty, which signals "synthesize a reply at runtime";
/// `entities` is an optional `KEY:VALUE` annotation string. Missing optional
/// fields default to the empty string at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    /// Example utterance text
    pub text: String,
    /// Intent label (e.g. `check_balance`)
    pub intent: String,
    /// Canned response; empty means "synthesize at runtime"
    #[serde(default)]
    pub response: String,
    /// `|`-delimited `KEY:VALUE` entity annotation
    #[serde(default)]
    pub entities: String,
}

impl Example {
    /// Create a new corpus row.
    pub fn new(
        text: impl Into<String>,
        intent: impl Into<String>,
        response: impl Into<String>,
        entities: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            intent: intent.into(),
            response: response.into(),
            entities: entities.into(),
        }
    }

    /// Whether another row would be a duplicate of this one.
    ///
    /// Duplicates are identified by `(text, intent, entities)`; the response
    /// is deliberately not part of the key.
    pub fn same_row(&self, other: &Example) -> bool {
        self.text == other.text && self.intent == other.intent && self.entities == other.entities
    }
}

/// Outcome of matching an utterance against the corpus.
///
/// Cloned out of the winning row so it does not borrow the store snapshot.
/// Produced fresh per request, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// Intent label of the matched row
    pub intent: String,
    /// Canned response (may be empty)
    pub response: String,
    /// Entity annotation of the matched row
    pub entities: String,
}

impl From<&Example> for MatchResult {
    fn from(row: &Example) -> Self {
        Self {
            intent: row.intent.clone(),
            response: row.response.clone(),
            entities: row.entities.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_row_ignores_response() {
        let a = Example::new("check balance", "check_balance", "Sure", "MONEY:500");
        let b = Example::new("check balance", "check_balance", "", "MONEY:500");
        assert!(a.same_row(&b));

        let c = Example::new("check balance", "check_balance", "Sure", "");
        assert!(!a.same_row(&c));
    }

    #[test]
    fn test_optional_fields_default_to_empty() {
        let row: Example = serde_json::from_str(r#"{"text":"hi","intent":"greet"}"#).unwrap();
        assert_eq!(row.response, "");
        assert_eq!(row.entities, "");
    }
}
