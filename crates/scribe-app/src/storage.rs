//! History persistence
//!
//! A single JSON file holds the serialized history array, newest first.
//! Load is best-effort: a missing or unparsable file yields an empty history.
//! Save is best-effort and takes an exclusive lock so a second running
//! instance cannot interleave writes.

use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use scribe_core::prelude::*;
use scribe_core::types::Article;

use crate::history::History;

const HISTORY_FILENAME: &str = "history.json";

/// Default history file location: `<data_local_dir>/scribe/history.json`
pub fn default_history_path() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("scribe").join(HISTORY_FILENAME)
}

/// Load the history list from disk
///
/// Never fails: a missing file is an empty history, and a corrupt file is
/// logged and treated as empty rather than blocking startup.
pub fn load_history(path: &Path) -> History {
    if !path.exists() {
        debug!(path = %path.display(), "no history file, starting empty");
        return History::new();
    }

    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            warn!(path = %path.display(), "failed to read history file, starting empty: {e}");
            return History::new();
        }
    };

    match serde_json::from_str::<Vec<Article>>(&raw) {
        Ok(entries) => {
            debug!(count = entries.len(), "loaded history");
            History::from_entries(entries)
        }
        Err(e) => {
            warn!(path = %path.display(), "history file unparsable, starting empty: {e}");
            History::new()
        }
    }
}

/// Write the history list to disk
///
/// Takes an exclusive lock for the duration of the write. Callers treat a
/// failure as non-fatal: the in-memory history is not rolled back.
pub fn save_history(path: &Path, history: &History) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::storage(format!("failed to create data directory: {e}")))?;
    }

    let content = serde_json::to_string_pretty(history.entries())
        .map_err(|e| Error::storage(format!("failed to serialize history: {e}")))?;

    let file = std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| Error::storage(format!("failed to open history file: {e}")))?;

    file.lock_exclusive()
        .map_err(|e| Error::storage(format!("failed to lock history file: {e}")))?;

    // Lock is released when the file is dropped
    let mut file = file;
    file.write_all(content.as_bytes())
        .map_err(|e| Error::storage(format!("failed to write history file: {e}")))?;
    file.flush()
        .map_err(|e| Error::storage(format!("failed to flush history file: {e}")))?;

    debug!(path = %path.display(), count = history.len(), "saved history");
    Ok(())
}
