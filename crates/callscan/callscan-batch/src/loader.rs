//! Record discovery and decoding.

use std::fs;
use std::path::{Path, PathBuf};

use callscan_core::errors::{BatchError, RecordError};
use callscan_core::models::Conversation;

/// Regular files directly inside `dir` with the given extension, sorted by
/// file name. Subdirectories are not descended into.
pub fn discover_records(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, BatchError> {
    let entries = fs::read_dir(dir).map_err(|source| BatchError::DirectoryUnreadable {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut records: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| path.extension().is_some_and(|ext| ext == extension))
        .collect();
    records.sort();
    Ok(records)
}

/// Call id for a record: the file name without its extension.
pub fn call_id_for(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Read and decode one call record.
pub fn load_record(path: &Path) -> Result<Conversation, RecordError> {
    let content = fs::read_to_string(path).map_err(|source| RecordError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|e| RecordError::from_json(path, e))
}
