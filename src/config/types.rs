//! Configuration data types.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Name of the section whose options are visible from every other section.
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// Sectioned key/value configuration parsed from at most one file.
///
/// An empty value (no sections, no origin) is what resolution yields when no
/// candidate file could be used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub(super) origin: Option<PathBuf>,
    pub(super) defaults: BTreeMap<String, String>,
    pub(super) sections: BTreeMap<String, BTreeMap<String, String>>,
}

impl ResolvedConfig {
    /// Configuration with no sections and no keys.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Path of the file this configuration was parsed from.
    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }

    /// True when nothing was parsed (no sections, no defaults).
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty() && self.defaults.is_empty()
    }

    /// Check whether a named section exists.
    pub fn has_section(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    /// Names of all sections, excluding `DEFAULT`.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Look up an option in a section.
    ///
    /// Option names are case-insensitive. Values from `[DEFAULT]` are used as
    /// a fallback, but only for sections that exist.
    pub fn get(&self, section: &str, option: &str) -> Option<&str> {
        let key = option.to_lowercase();
        if section == DEFAULT_SECTION {
            return self.defaults.get(&key).map(String::as_str);
        }
        let entries = self.sections.get(section)?;
        entries
            .get(&key)
            .or_else(|| self.defaults.get(&key))
            .map(String::as_str)
    }

    pub(super) fn with_origin(mut self, path: &Path) -> Self {
        self.origin = Some(path.to_path_buf());
        self
    }

    pub(super) fn entries_mut(&mut self, section: &str) -> &mut BTreeMap<String, String> {
        if section == DEFAULT_SECTION {
            &mut self.defaults
        } else {
            self.sections.entry(section.to_string()).or_default()
        }
    }
}
