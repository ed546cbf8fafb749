//! Reply text templates
//!
//! Pre-authored corpus rows carry their own responses; these templates
//! cover the two replies the engine itself has to produce — the
//! synthesized balance statement and the out-of-scope fallback.

use serde::{Deserialize, Serialize};

/// Templates for engine-produced replies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyTemplates {
    /// Balance statement; `{amount}` is substituted with the figure
    #[serde(default = "default_balance")]
    pub balance: String,
    /// Fixed reply when no corpus row matches
    #[serde(default = "default_out_of_scope")]
    pub out_of_scope: String,
}

fn default_balance() -> String {
    "💰 Your balance is {amount}.".to_string()
}

fn default_out_of_scope() -> String {
    "I can only assist with banking questions. Try asking about balance, transfers, loans, or cards."
        .to_string()
}

impl ReplyTemplates {
    /// Render the balance statement for a given amount.
    pub fn balance_reply(&self, amount: &str) -> String {
        self.balance.replace("{amount}", amount)
    }
}

impl Default for ReplyTemplates {
    fn default() -> Self {
        Self {
            balance: default_balance(),
            out_of_scope: default_out_of_scope(),
        }
    }
}
