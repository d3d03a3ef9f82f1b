//! # Locale Store
//!
//! Language tag → (key → translated string). Registration merges into the
//! existing table for a language, later values winning per key. Lookups
//! never fail: a missing key translates to itself.

use std::collections::HashMap;
use tracing::debug;

/// Language active in a fresh store
pub const DEFAULT_LANGUAGE: &str = "zh-cn";

#[derive(Debug, Clone)]
pub struct LocaleStore {
    tables: HashMap<String, HashMap<String, String>>,
    language: String,
}

impl LocaleStore {
    pub fn new() -> Self {
        Self {
            tables: HashMap::new(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Merge `table` into the strings registered for `lang`
    pub fn register_locales<I, K, V>(&mut self, lang: impl Into<String>, table: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let lang = lang.into();
        let strings = self.tables.entry(lang.clone()).or_default();
        let before = strings.len();

        for (key, value) in table {
            strings.insert(key.into(), value.into());
        }

        debug!(lang = %lang, added = strings.len() - before, total = strings.len(), "Registered locales");
    }

    /// Switch the active language.
    ///
    /// Returns false (and changes nothing) when `lang` was never registered.
    pub fn set_language(&mut self, lang: &str) -> bool {
        if !self.tables.contains_key(lang) {
            debug!(lang, "Ignoring switch to unregistered language");
            return false;
        }
        self.language = lang.to_string();
        true
    }

    /// Currently active language
    pub fn language(&self) -> &str {
        &self.language
    }

    /// All registered languages, sorted
    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        languages.sort_unstable();
        languages
    }

    pub fn has_language(&self, lang: &str) -> bool {
        self.tables.contains_key(lang)
    }

    /// Translate `key` in the active language, falling back to `key` itself
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.lookup(key).unwrap_or(key)
    }

    /// Translation of `key` in the active language, if one is registered
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.tables
            .get(&self.language)
            .and_then(|strings| strings.get(key))
            .map(String::as_str)
    }
}

impl Default for LocaleStore {
    fn default() -> Self {
        Self::new()
    }
}
