//! Flat message lookup.

use std::collections::HashMap;

use crate::options::ConfigError;

/// Maps message keys to display text.
pub trait Translate: Send + Sync {
    /// Look up `key`, returning the key itself when it has no entry.
    fn translate(&self, key: &str) -> String;
}

/// In-memory message catalog keyed by the engine's default messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog from a flat JSON object of strings.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let entries: HashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    /// Add an entry, builder style.
    pub fn with(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(key, text);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<HashMap<String, String>> for Catalog {
    fn from(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}

impl Translate for Catalog {
    fn translate(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}
