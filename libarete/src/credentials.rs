//! Credential lookup for integrations.
//!
//! Credentials come from the environment first, then from credential files:
//!
//! ```text
//! <workspace>/.credentials/credentials.yaml   (or .yml)
//! ~/.arete/credentials.yaml                  (or .yml)
//! ```
//!
//! Each file holds one section per integration:
//!
//! ```text
//! fathom:
//!   api_key: "..."
//! ```

use crate::value::{ConfigValue, Section};
use crate::workspace::workspace_root;
use crate::load_yaml;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Variable suffixes checked for `<INTEGRATION>_<SUFFIX>`.
pub const CREDENTIAL_ENV_SUFFIXES: [&str; 5] =
    ["API_KEY", "TOKEN", "SECRET", "CLIENT_ID", "CLIENT_SECRET"];

/// Where credential files are looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialSources {
    pub workspace: PathBuf,
    pub home: Option<PathBuf>,
}

impl CredentialSources {
    /// Sources for the resolved workspace and the user's home directory.
    pub fn discover() -> Self {
        Self {
            workspace: workspace_root(),
            home: dirs::home_dir(),
        }
    }

    /// Candidate credential files, in lookup order.
    pub fn files(&self) -> Vec<PathBuf> {
        let mut files = credential_files(&self.workspace.join(".credentials"));
        if let Some(home) = &self.home {
            files.extend(credential_files(&home.join(".arete")));
        }
        files
    }

    /// Load credentials for `integration` from these sources.
    ///
    /// Environment variables win over files. Among files, the first one
    /// with a section for the integration wins.
    pub fn load(&self, integration: &str) -> Option<Section> {
        let from_env = env_credentials(integration);
        if !from_env.is_empty() {
            debug!(integration, keys = from_env.len(), "credentials from environment");
            return Some(from_env);
        }

        for path in self.files() {
            if !path.is_file() {
                continue;
            }
            let Some(mut doc) = load_yaml(&path) else {
                continue;
            };
            match doc.take_section(integration) {
                Some(creds) => {
                    debug!(integration, path = %path.display(), "credentials from file");
                    return Some(creds);
                }
                None if doc.get(integration).is_some_and(ConfigValue::is_scalar) => {
                    debug!(
                        integration,
                        path = %path.display(),
                        "credential entry is not a section, skipping"
                    );
                }
                None => {}
            }
        }

        debug!(integration, "no credentials found");
        None
    }
}

/// Load credentials for `integration` from the environment, the workspace,
/// or the home directory.
pub fn load_credentials(integration: &str) -> Option<Section> {
    CredentialSources::discover().load(integration)
}

fn credential_files(dir: &Path) -> Vec<PathBuf> {
    vec![dir.join("credentials.yaml"), dir.join("credentials.yml")]
}

/// Collect `<INTEGRATION>_<SUFFIX>` variables that are set and non-empty.
fn env_credentials(integration: &str) -> Section {
    let prefix = integration.to_uppercase();
    CREDENTIAL_ENV_SUFFIXES
        .iter()
        .filter_map(|suffix| {
            let value = env::var(format!("{}_{}", prefix, suffix)).ok()?;
            if value.is_empty() {
                return None;
            }
            Some((suffix.to_lowercase(), ConfigValue::Scalar(value)))
        })
        .collect()
}
