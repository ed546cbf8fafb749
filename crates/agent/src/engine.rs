//! Chat engine
//!
//! One `handle_turn` call is a full request/response cycle: stateless given
//! the current corpus snapshot and the caller-supplied utterance, with all
//! cross-turn memory in the user fact record and the growing corpus.

use std::sync::Arc;

use bankbot_config::ReplyTemplates;
use bankbot_core::{
    color_for_intent, keys, Example, ExtractedEntities, UserFactRecord, OUT_OF_SCOPE,
};
use bankbot_corpus::{AppendOutcome, CorpusStore};

use crate::facts::UserFactStore;

/// Opaque account facts supplied by the collaborator layer (the engine
/// does not own account records).
#[derive(Debug, Clone)]
pub struct AccountProfile {
    pub account_number: String,
    pub balance: f64,
}

/// Structured result of one chat turn.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    pub reply: String,
    pub intent: String,
    pub entities: ExtractedEntities,
    pub intent_color: &'static str,
}

/// The chat engine. Constructed once at process start; the corpus store is
/// the only process-wide mutable state and is shared by reference.
pub struct ChatEngine {
    corpus: Arc<CorpusStore>,
    facts: Arc<dyn UserFactStore>,
    templates: ReplyTemplates,
}

impl ChatEngine {
    pub fn new(
        corpus: Arc<CorpusStore>,
        facts: Arc<dyn UserFactStore>,
        templates: ReplyTemplates,
    ) -> Self {
        Self {
            corpus,
            facts,
            templates,
        }
    }

    /// Run one chat turn for a user.
    ///
    /// Never fails: no-match falls back to the out-of-scope reply, and
    /// persistence failures are logged and swallowed (the corpus simply
    /// does not grow for that turn).
    pub fn handle_turn(
        &self,
        user_id: &str,
        utterance: &str,
        profile: &AccountProfile,
    ) -> TurnOutcome {
        let utterance = utterance.trim();

        let mut record = self.load_or_create_record(user_id, profile);

        let resolved = {
            let examples = self.corpus.examples();
            bankbot_nlu::resolve(utterance, &examples)
        };

        let outcome = match resolved {
            Some(matched) => {
                let mut entities = bankbot_nlu::extract(utterance, &matched.entities);

                let reply = {
                    let examples = self.corpus.examples();
                    bankbot_nlu::synthesize_with(
                        &matched,
                        &mut entities,
                        utterance,
                        &examples,
                        &self.templates,
                    )
                };

                if !entities.is_empty() {
                    record.absorb(&entities);
                }
                record.record_turn(utterance, &reply, &matched.intent);

                self.grow_corpus(utterance, &matched.intent, &reply, &entities);

                TurnOutcome {
                    intent_color: color_for_intent(&matched.intent),
                    reply,
                    intent: matched.intent,
                    entities,
                }
            }
            None => {
                let reply = self.templates.out_of_scope.clone();
                record.record_turn(utterance, &reply, OUT_OF_SCOPE);

                TurnOutcome {
                    reply,
                    intent: OUT_OF_SCOPE.to_string(),
                    entities: ExtractedEntities::default(),
                    intent_color: color_for_intent(OUT_OF_SCOPE),
                }
            }
        };

        if let Err(err) = self.facts.save(user_id, &record) {
            tracing::warn!(user_id, "failed to save user facts: {err}");
        }

        outcome
    }

    fn load_or_create_record(&self, user_id: &str, profile: &AccountProfile) -> UserFactRecord {
        match self.facts.load(user_id) {
            Ok(Some(record)) => record,
            Ok(None) => UserFactRecord::new(&profile.account_number, profile.balance),
            Err(err) => {
                tracing::warn!(user_id, "failed to load user facts: {err}");
                UserFactRecord::new(&profile.account_number, profile.balance)
            }
        }
    }

    /// Persist the turn as a new corpus row when it carried numeric
    /// entities (or the reply itself did). Append failures must not break
    /// the turn.
    fn grow_corpus(&self, utterance: &str, intent: &str, reply: &str, entities: &ExtractedEntities) {
        let mut parts = Vec::new();
        if let Some(amount) = &entities.amount {
            parts.push(format!("{}:{}", keys::MONEY, amount));
        }
        if let Some(account) = &entities.account_number {
            parts.push(format!("{}:{}", keys::ACCOUNT_NUMBER, account));
        }
        let mut entities_str = parts.join("|");

        if entities_str.is_empty() {
            if let Some(run) = bankbot_nlu::first_digit_run(reply) {
                entities_str = format!("{}:{}", keys::MONEY, run);
            }
        }

        if entities_str.is_empty() {
            return;
        }

        match self
            .corpus
            .append(Example::new(utterance, intent, reply, entities_str))
        {
            Ok(AppendOutcome::Added) => {
                tracing::debug!(intent, "corpus grew by one example");
            }
            Ok(AppendOutcome::Duplicate) => {}
            Err(err) => {
                tracing::warn!(intent, "corpus append failed: {err}");
            }
        }
    }
}
