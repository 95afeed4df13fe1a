//! Test fixture loader for callscan golden conversations and batch directories.
//!
//! Provides typed deserialization of fixture JSON files, small builders for
//! in-test conversations, and helpers for staging record directories.

use std::path::{Path, PathBuf};

use callscan_core::models::{Conversation, Speaker, Utterance};
use serde::de::DeserializeOwned;

/// Root directory of the fixture data.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Load a fixture file as a conversation.
pub fn load_conversation(relative_path: &str) -> Conversation {
    load_fixture(relative_path)
}

/// Get the absolute path to a fixture file or directory.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    paths.sort();
    paths
}

/// Copy every regular file of a fixture subdirectory into `dest`.
pub fn stage_fixture_dir(subdir: &str, dest: &Path) {
    let dir = fixtures_root().join(subdir);
    for entry in std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
    {
        let path = entry.expect("dir entry").path();
        if path.is_file() {
            let name = path.file_name().expect("file name");
            std::fs::copy(&path, dest.join(name))
                .unwrap_or_else(|e| panic!("Failed to copy {}: {}", path.display(), e));
        }
    }
}

/// Write a conversation as a record file named `<call_id>.json` in `dir`.
pub fn write_record(dir: &Path, call_id: &str, conversation: &Conversation) -> PathBuf {
    let path = dir.join(format!("{call_id}.json"));
    let json = serde_json::to_string_pretty(conversation).expect("serialize conversation");
    std::fs::write(&path, json)
        .unwrap_or_else(|e| panic!("Failed to write {}: {}", path.display(), e));
    path
}

/// Build a conversation from `(speaker, text)` pairs.
pub fn conversation(turns: &[(Speaker, &str)]) -> Conversation {
    turns
        .iter()
        .map(|(speaker, text)| Utterance::new(*speaker, *text))
        .collect()
}
