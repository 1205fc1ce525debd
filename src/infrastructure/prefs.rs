use std::{collections::HashMap, fs, path::PathBuf};

use anyhow::Context;
use tracing::warn;

use crate::theme::PreferenceStore;

/// JSON-file preference store, the gateway's stand-in for the site's
/// browser local storage. A missing or corrupt file degrades to an
/// empty store instead of failing.
pub struct FilePreferenceStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FilePreferenceStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                warn!("Preference store at {} is corrupt ({}), starting empty", path.display(), e);
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        };

        FilePreferenceStore { path, values }
    }

    fn persist(&self) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(&self.values)
            .context("serializing preference store")?;
        fs::write(&self.path, content)
            .with_context(|| format!("writing preference store to {}", self.path.display()))
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        if let Err(e) = self.persist() {
            warn!("Failed to persist preference store: {}", e);
        }
    }
}
