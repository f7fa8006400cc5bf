//! Parsed document representation.

use std::collections::hash_map;
use std::collections::HashMap;
use std::fmt;

/// The result of parsing a whole file: the root section.
pub type Document = Section;

/// A value stored under a key: either a leaf string or a nested section.
#[derive(Clone, PartialEq, Eq)]
pub enum ConfigValue {
    /// Leaf string value, quotes already stripped.
    Scalar(String),
    /// Nested mapping opened by a `key:` line with no value.
    Section(Section),
}

impl ConfigValue {
    /// Returns `true` if this value is a scalar.
    pub fn is_scalar(&self) -> bool {
        matches!(self, ConfigValue::Scalar(_))
    }

    /// Returns `true` if this value is a section.
    pub fn is_section(&self) -> bool {
        matches!(self, ConfigValue::Section(_))
    }

    /// Returns the string if this is a `Scalar`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::Scalar(s) => Some(s),
            ConfigValue::Section(_) => None,
        }
    }

    /// Returns the nested section if this is a `Section`.
    pub fn as_section(&self) -> Option<&Section> {
        match self {
            ConfigValue::Section(section) => Some(section),
            ConfigValue::Scalar(_) => None,
        }
    }

    /// Consumes the value, returning the nested section if there is one.
    pub fn into_section(self) -> Option<Section> {
        match self {
            ConfigValue::Section(section) => Some(section),
            ConfigValue::Scalar(_) => None,
        }
    }
}

impl fmt::Debug for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Scalar(s) => write!(f, "{:?}", s),
            ConfigValue::Section(section) => section.fmt(f),
        }
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::Scalar(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::Scalar(s.to_string())
    }
}

impl From<Section> for ConfigValue {
    fn from(section: Section) -> Self {
        ConfigValue::Section(section)
    }
}

/// An unordered mapping from keys to values.
///
/// Inserting a key that is already present replaces the earlier value.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Section {
    entries: HashMap<String, ConfigValue>,
}

impl Section {
    /// Create an empty section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the one it replaced.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ConfigValue>,
    ) -> Option<ConfigValue> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.entries.get(key)
    }

    /// Returns the scalar stored under `key`, if any.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ConfigValue::as_str)
    }

    /// Returns the nested section stored under `key`, if any.
    pub fn section(&self, key: &str) -> Option<&Section> {
        self.get(key).and_then(ConfigValue::as_section)
    }

    /// Remove and return the nested section stored under `key`.
    ///
    /// A scalar under `key` is left in place.
    pub fn take_section(&mut self, key: &str) -> Option<Section> {
        if !self.get(key).is_some_and(ConfigValue::is_section) {
            return None;
        }
        self.entries.remove(key).and_then(ConfigValue::into_section)
    }

    /// Follow a dot-separated path of keys, e.g. `defaults.min_duration`.
    ///
    /// Keys that themselves contain dots cannot be addressed this way.
    pub fn lookup(&self, path: &str) -> Option<&ConfigValue> {
        let mut parts = path.split('.');
        let mut current = self.get(parts.next()?)?;
        for part in parts {
            current = current.as_section()?.get(part)?;
        }
        Some(current)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> hash_map::Keys<'_, String, ConfigValue> {
        self.entries.keys()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, ConfigValue> {
        self.entries.iter()
    }

    /// Keys in sorted order, for stable output.
    pub fn sorted_keys(&self) -> Vec<&String> {
        let mut keys: Vec<&String> = self.entries.keys().collect();
        keys.sort();
        keys
    }
}

impl fmt::Debug for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.sorted_keys().into_iter().map(|k| (k, &self.entries[k])))
            .finish()
    }
}

impl From<HashMap<String, ConfigValue>> for Section {
    fn from(entries: HashMap<String, ConfigValue>) -> Self {
        Self { entries }
    }
}

impl FromIterator<(String, ConfigValue)> for Section {
    fn from_iter<I: IntoIterator<Item = (String, ConfigValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Section {
    type Item = (String, ConfigValue);
    type IntoIter = hash_map::IntoIter<String, ConfigValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Section {
    type Item = (&'a String, &'a ConfigValue);
    type IntoIter = hash_map::Iter<'a, String, ConfigValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
