//! bankbot REPL
//!
//! Minimal driver for local use: loads settings, opens the corpus and fact
//! stores, then runs chat turns against a demo account from stdin. The
//! real account/session layer is a collaborator of the engine, not part of
//! this binary.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use bankbot_agent::{AccountProfile, ChatEngine, JsonFactStore, UserFactStore};
use bankbot_config::Settings;
use bankbot_corpus::CorpusStore;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let settings = Settings::load(config_path.as_deref())?;

    let corpus = Arc::new(CorpusStore::open(&settings.storage.corpus_path)?);
    tracing::info!(rows = corpus.len(), "corpus ready");

    let facts: Arc<dyn UserFactStore> =
        Arc::new(JsonFactStore::open(&settings.storage.user_facts_path)?);
    let engine = ChatEngine::new(Arc::clone(&corpus), facts, settings.templates.clone());

    // Demo account; a deployment gets these from its user database
    let profile = AccountProfile {
        account_number: "949254126395".to_string(),
        balance: 5000.0,
    };

    println!("bankbot ready — type a message, or 'quit' to exit");
    let stdin = io::stdin();
    loop {
        print!("you> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            break;
        }

        let outcome = engine.handle_turn("local", line, &profile);
        println!("bot [{}]> {}", outcome.intent, outcome.reply);
    }

    Ok(())
}
