//! Seen-state persistence (`seen.json`): per source URL, the raw rows
//! observed on the last run. Loaded once at startup, written once at the end
//! of a cycle.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde_json::Value;

/// Source URL → raw rows seen there on the previous run. A `BTreeMap` keeps
/// key iteration (and the serialized file) stable across runs.
pub type SeenState = BTreeMap<String, Vec<String>>;

/// Key under which a pre-per-source flat list is filed on load.
pub const LEGACY_KEY: &str = "legacy";

pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Absent file → empty state. A top-level array is the old single-source
    /// format and is migrated to `{"legacy": [...]}`. Malformed JSON is an
    /// error; the run aborts rather than silently re-announcing everything.
    pub fn load(&self) -> Result<SeenState> {
        if !self.path.exists() {
            return Ok(SeenState::new());
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("reading state file {}", self.path.display()))?;
        let value: Value = serde_json::from_str(&raw)
            .with_context(|| format!("parsing state file {}", self.path.display()))?;

        if value.is_array() {
            let rows: Vec<String> = serde_json::from_value(value)
                .with_context(|| format!("migrating legacy state {}", self.path.display()))?;
            return Ok(SeenState::from([(LEGACY_KEY.to_string(), rows)]));
        }

        serde_json::from_value(value)
            .with_context(|| format!("decoding state file {}", self.path.display()))
    }

    pub fn save(&self, state: &SeenState) -> Result<()> {
        let json = serde_json::to_string_pretty(state).context("serializing seen state")?;
        fs::write(&self.path, json)
            .with_context(|| format!("writing state file {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::new(dir.path().join("seen.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::new(dir.path().join("seen.json"));

        let mut state = SeenState::new();
        state.insert(
            "https://example.test/a".into(),
            vec!["r1".into(), "r2".into()],
        );
        store.save(&state).unwrap();
        assert_eq!(store.load().unwrap(), state);
    }

    #[test]
    fn flat_list_migrates_to_legacy_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seen.json");
        fs::write(&path, r#"["rowA", "rowB"]"#).unwrap();

        let state = StateStore::new(&path).load().unwrap();
        assert_eq!(
            state.get(LEGACY_KEY),
            Some(&vec!["rowA".to_string(), "rowB".to_string()])
        );
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seen.json");
        fs::write(&path, "{not json").unwrap();

        assert!(StateStore::new(&path).load().is_err());
    }
}
