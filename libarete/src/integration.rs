//! Per-integration configuration files.
//!
//! An integration's settings live at
//! `<workspace>/.cursor/integrations/configs/<name>.yaml` (or `.yml`).
//! A missing or unreadable file means "use the defaults", so loading always
//! produces a section.

use crate::load_yaml;
use crate::value::Section;
use crate::workspace::workspace_root;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::debug;

/// Directory holding integration configs, relative to the workspace.
const CONFIG_DIR: [&str; 3] = [".cursor", "integrations", "configs"];

/// Loaded configuration for one integration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrationConfig {
    root: Section,
}

impl IntegrationConfig {
    /// The `defaults` section, or an empty one if absent or not a section.
    pub fn defaults(&self) -> &Section {
        static EMPTY: OnceLock<Section> = OnceLock::new();
        self.root
            .section("defaults")
            .unwrap_or_else(|| EMPTY.get_or_init(Section::new))
    }

    /// A scalar from the `defaults` section.
    pub fn default_str(&self, key: &str) -> Option<&str> {
        self.defaults().get_str(key)
    }

    pub fn as_section(&self) -> &Section {
        &self.root
    }

    pub fn into_section(self) -> Section {
        self.root
    }
}

impl From<Section> for IntegrationConfig {
    fn from(root: Section) -> Self {
        Self { root }
    }
}

/// Load the config for `integration` from the resolved workspace.
pub fn load_integration_config(integration: &str) -> IntegrationConfig {
    load_integration_config_from(&workspace_root(), integration)
}

/// Load the config for `integration` from an explicit workspace root.
pub fn load_integration_config_from(workspace: &Path, integration: &str) -> IntegrationConfig {
    for path in config_files(workspace, integration) {
        if path.is_file() {
            debug!(integration, path = %path.display(), "loading integration config");
            return load_yaml(&path).unwrap_or_default().into();
        }
    }
    debug!(integration, "no integration config, using defaults");
    IntegrationConfig::default()
}

fn config_files(workspace: &Path, integration: &str) -> Vec<PathBuf> {
    let dir: PathBuf = CONFIG_DIR.iter().fold(workspace.to_path_buf(), |p, c| p.join(c));
    vec![
        dir.join(format!("{}.yaml", integration)),
        dir.join(format!("{}.yml", integration)),
    ]
}
