//! Engine settings

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::templates::ReplyTemplates;
use crate::ConfigError;

/// Top-level settings for the chat engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Where the corpus log and user fact file live
    #[serde(default)]
    pub storage: StorageConfig,
    /// Reply text templates
    #[serde(default)]
    pub templates: ReplyTemplates,
}

/// Storage locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Append-only CSV corpus log
    #[serde(default = "default_corpus_path")]
    pub corpus_path: PathBuf,
    /// JSON file holding per-user fact records
    #[serde(default = "default_user_facts_path")]
    pub user_facts_path: PathBuf,
}

fn default_corpus_path() -> PathBuf {
    PathBuf::from("data/bank_chatbot_dataset.csv")
}

fn default_user_facts_path() -> PathBuf {
    PathBuf::from("data/user_facts.json")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            corpus_path: default_corpus_path(),
            user_facts_path: default_user_facts_path(),
        }
    }
}

impl Settings {
    /// Load settings from an optional TOML file, then apply `BANKBOT_`
    /// environment overrides (`BANKBOT_STORAGE__CORPUS_PATH=...`).
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        let settings = builder
            .add_source(config::Environment::with_prefix("BANKBOT").separator("__"))
            .build()?
            .try_deserialize::<Settings>()?;

        tracing::debug!(
            corpus = %settings.storage.corpus_path.display(),
            facts = %settings.storage.user_facts_path.display(),
            "settings loaded"
        );

        Ok(settings)
    }
}
