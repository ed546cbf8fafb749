//! Append-only CSV corpus log
//!
//! The durable half of the corpus store. The file carries the header
//! `text,intent,response,entities` with standard CSV quoting. Files written
//! by other tooling may start with a UTF-8 byte-order marker; it is
//! tolerated on read and written when creating a fresh file so the log
//! round-trips with spreadsheet tools.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use bankbot_core::Example;

use crate::CorpusError;

const HEADER: [&str; 4] = ["text", "intent", "response", "entities"];
const BOM: &[u8] = b"\xef\xbb\xbf";

/// Handle to the corpus log file. Does no locking of its own; the store
/// serializes appends.
#[derive(Debug)]
pub struct CorpusLog {
    path: PathBuf,
}

impl CorpusLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every row currently in the log. A missing file is an empty
    /// corpus, not an error. Unreadable rows are skipped with a warning;
    /// loaded rows are not deduplicated.
    pub fn load(&self) -> Result<Vec<Example>, CorpusError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let bytes = fs::read(&self.path)?;
        let data = bytes.strip_prefix(BOM).unwrap_or(bytes.as_slice());

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(data);

        let mut rows = Vec::new();
        for record in reader.deserialize::<Example>() {
            match record {
                Ok(row) => rows.push(row),
                Err(err) => tracing::warn!(path = %self.path.display(), "skipping unreadable corpus row: {err}"),
            }
        }

        tracing::debug!(path = %self.path.display(), rows = rows.len(), "corpus log loaded");
        Ok(rows)
    }

    /// Append one row without rewriting existing ones. Creates the file
    /// (and parent directory) with the header on first write.
    pub fn append(&self, row: &Example) -> Result<(), CorpusError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let fresh = fs::metadata(&self.path).map(|m| m.len() == 0).unwrap_or(true);

        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        if fresh {
            file.write_all(BOM)?;
        }

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        if fresh {
            writer.write_record(HEADER)?;
        }
        writer.serialize(row)?;
        writer.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let log = CorpusLog::new(dir.path().join("corpus.csv"));
        assert!(log.load().unwrap().is_empty());
    }

    #[test]
    fn test_append_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let log = CorpusLog::new(dir.path().join("corpus.csv"));

        log.append(&Example::new("check balance", "check_balance", "Sure", ""))
            .unwrap();
        log.append(&Example::new(
            "balance for 123456",
            "check_balance",
            "",
            "ACCOUNT_NUMBER:123456|MONEY:500",
        ))
        .unwrap();

        let rows = log.load().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].text, "check balance");
        assert_eq!(rows[1].entities, "ACCOUNT_NUMBER:123456|MONEY:500");
    }

    #[test]
    fn test_quoted_fields_survive() {
        let dir = tempfile::tempdir().unwrap();
        let log = CorpusLog::new(dir.path().join("corpus.csv"));

        log.append(&Example::new(
            "transfer, please",
            "transfer_money",
            "Sure, \"right away\"",
            "",
        ))
        .unwrap();

        let rows = log.load().unwrap();
        assert_eq!(rows[0].text, "transfer, please");
        assert_eq!(rows[0].response, "Sure, \"right away\"");
    }

    #[test]
    fn test_bom_tolerated_on_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.csv");
        fs::write(
            &path,
            "\u{feff}text,intent,response,entities\ncheck balance,check_balance,Sure,\n",
        )
        .unwrap();

        let log = CorpusLog::new(&path);
        let rows = log.load().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].text, "check balance");
    }

    #[test]
    fn test_header_written_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.csv");
        let log = CorpusLog::new(&path);

        log.append(&Example::new("hi", "greet", "Hello!", "")).unwrap();
        log.append(&Example::new("bye", "goodbye", "Goodbye!", "")).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.matches("text,intent,response,entities").count(), 1);
    }
}
