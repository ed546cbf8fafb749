//! Per-user fact record
//!
//! The engine's only cross-turn memory. A record is created lazily on a
//! user's first chat turn, mutated with the entities extracted on every
//! turn, and never deleted by the core (expiry is a collaborator concern).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::ExtractedEntities;

/// One request/response cycle stored in the conversation history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// What the user said
    pub user: String,
    /// What the bot replied
    pub bot: String,
    /// Intent resolved for the turn
    pub intent: String,
    /// When the turn occurred
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

/// Facts known about a single user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserFactRecord {
    /// Account number, seeded from the account profile and overwritten by
    /// any account number extracted from a later turn
    pub account_number: String,
    /// Account balance as supplied by the collaborator
    pub balance: f64,
    /// Most recently extracted amount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_amount: Option<String>,
    /// Most recently extracted person name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_recipient: Option<String>,
    /// Flat append-only conversation history
    #[serde(default)]
    pub conversations: Vec<ConversationTurn>,
}

impl UserFactRecord {
    /// Create a record from the collaborator-supplied account facts.
    pub fn new(account_number: impl Into<String>, balance: f64) -> Self {
        Self {
            account_number: account_number.into(),
            balance,
            last_amount: None,
            last_recipient: None,
            conversations: Vec::new(),
        }
    }

    /// Merge a turn's extracted entities into the record.
    pub fn absorb(&mut self, entities: &ExtractedEntities) {
        if let Some(amount) = &entities.amount {
            self.last_amount = Some(amount.clone());
        }
        if let Some(person) = &entities.person {
            self.last_recipient = Some(person.clone());
        }
        if let Some(account) = &entities.account_number {
            self.account_number = account.clone();
        }
    }

    /// Append a turn to the conversation history.
    pub fn record_turn(
        &mut self,
        user: impl Into<String>,
        bot: impl Into<String>,
        intent: impl Into<String>,
    ) {
        self.conversations.push(ConversationTurn {
            user: user.into(),
            bot: bot.into(),
            intent: intent.into(),
            timestamp: Utc::now(),
        });
    }
}
