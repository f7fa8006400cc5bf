//! Full YAML loading through `serde_yaml`.
//!
//! Mapping from YAML to a document:
//!   - YAML string           -> ConfigValue::Scalar
//!   - YAML number, bool     -> ConfigValue::Scalar (textual form)
//!   - YAML mapping          -> ConfigValue::Section
//!   - YAML null             -> empty ConfigValue::Section
//!   - YAML tagged value     -> the inner value
//!
//! Lossy edges:
//!   - Sequences have no counterpart and are skipped.
//!   - Mapping keys that are not strings, numbers, or bools are skipped.
//!   - A document whose top level is not a mapping is treated as absent.
//!   - A null document becomes an empty document.

use crate::read_source;
use crate::value::{ConfigValue, Document, Section};
use serde_yaml::Value as YamlValue;
use std::path::Path;
use tracing::debug;

/// Load a YAML file, returning `None` on read or syntax errors.
pub fn load(path: &Path) -> Option<Document> {
    let source = match read_source(path) {
        Ok(source) => source,
        Err(e) => {
            debug!(error = %e, "config file unavailable");
            return None;
        }
    };
    match decode(&source) {
        Ok(doc) => doc,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "YAML parse error");
            None
        }
    }
}

/// Decode YAML text. `Ok(None)` means the top level is not a mapping.
pub fn decode(input: &str) -> Result<Option<Document>, serde_yaml::Error> {
    let yaml: YamlValue = serde_yaml::from_str(input)?;
    Ok(match yaml {
        YamlValue::Null => Some(Section::new()),
        YamlValue::Mapping(_) | YamlValue::Tagged(_) => {
            convert(&yaml).and_then(ConfigValue::into_section)
        }
        _ => None,
    })
}

fn convert(yaml: &YamlValue) -> Option<ConfigValue> {
    match yaml {
        YamlValue::Null => Some(ConfigValue::Section(Section::new())),
        YamlValue::Bool(b) => Some(ConfigValue::Scalar(b.to_string())),
        YamlValue::Number(n) => Some(ConfigValue::Scalar(n.to_string())),
        YamlValue::String(s) => Some(ConfigValue::Scalar(s.clone())),
        YamlValue::Sequence(_) => None,
        YamlValue::Mapping(map) => {
            let mut section = Section::new();
            for (k, v) in map {
                let Some(key) = key_text(k) else {
                    continue;
                };
                if let Some(value) = convert(v) {
                    section.insert(key, value);
                }
            }
            Some(ConfigValue::Section(section))
        }
        YamlValue::Tagged(tagged) => convert(&tagged.value),
    }
}

fn key_text(key: &YamlValue) -> Option<String> {
    match key {
        YamlValue::String(s) => Some(s.clone()),
        YamlValue::Number(n) => Some(n.to_string()),
        YamlValue::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
