//! In-memory preference store.

use indexmap::IndexMap;

use crate::error::Result;

use super::{PreferenceStore, parse_bool};

/// Preference store held entirely in memory.
///
/// Used directly in tests and as the working copy behind [`super::FileStore`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    entries: IndexMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from existing text entries.
    pub fn from_entries(entries: IndexMap<String, String>) -> Self {
        Self { entries }
    }

    /// Add a raw text entry.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// The stored text for `key`, if any.
    pub fn get_raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn entries(&self) -> &IndexMap<String, String> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn parsed<T: std::str::FromStr>(&self, key: &str, default: T) -> T {
        self.get_raw(key)
            .and_then(|text| text.trim().parse().ok())
            .unwrap_or(default)
    }

    fn put(&mut self, key: &str, text: String) {
        self.entries.insert(key.to_string(), text);
    }
}

impl PreferenceStore for MemoryStore {
    fn get_int(&self, key: &str, default: i64) -> Result<i64> {
        Ok(self.parsed(key, default))
    }

    fn get_double(&self, key: &str, default: f64) -> Result<f64> {
        Ok(self.parsed(key, default))
    }

    fn get_float(&self, key: &str, default: f32) -> Result<f32> {
        Ok(self.parsed(key, default))
    }

    fn get_bool(&self, key: &str, default: bool) -> Result<bool> {
        Ok(self.get_raw(key).and_then(parse_bool).unwrap_or(default))
    }

    fn get_string(&self, key: &str, default: &str) -> Result<String> {
        Ok(self.get_raw(key).unwrap_or(default).to_string())
    }

    fn put_int(&mut self, key: &str, value: i64) -> Result<()> {
        self.put(key, value.to_string());
        Ok(())
    }

    fn put_double(&mut self, key: &str, value: f64) -> Result<()> {
        self.put(key, value.to_string());
        Ok(())
    }

    fn put_float(&mut self, key: &str, value: f32) -> Result<()> {
        self.put(key, value.to_string());
        Ok(())
    }

    fn put_bool(&mut self, key: &str, value: bool) -> Result<()> {
        self.put(key, value.to_string());
        Ok(())
    }

    fn put_string(&mut self, key: &str, value: &str) -> Result<()> {
        self.put(key, value.to_string());
        Ok(())
    }
}
