//! Extracted entity values

use serde::{Deserialize, Serialize};

/// Entities pulled out of a single turn.
///
/// A fixed set of optional fields rather than an open-ended string map:
/// the extractor only ever produces these three kinds. Note that for an
/// unannotated utterance containing a lone 6+ digit number, both
/// `account_number` and `amount` are filled from the same literal digits.
/// That duplication is documented corpus behavior, not a bug.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedEntities {
    /// Account number (explicit annotation value, or first 6+ digit run)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    /// Money amount (explicit annotation value, or first digit run)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    /// Person name (explicit annotation value, or first 2+ letter run)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person: Option<String>,
}

impl ExtractedEntities {
    /// True when no entity was extracted.
    pub fn is_empty(&self) -> bool {
        self.account_number.is_none() && self.amount.is_none() && self.person.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_empty() {
        assert!(ExtractedEntities::default().is_empty());

        let entities = ExtractedEntities {
            amount: Some("500".to_string()),
            ..Default::default()
        };
        assert!(!entities.is_empty());
    }
}
