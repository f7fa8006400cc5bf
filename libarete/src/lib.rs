//! Support library for Arete integrations.
//!
//! The centre of the crate is a small parser for the subset of YAML that
//! integration config and credential files actually use: `key: value`
//! pairs, sections nested by indentation, `#` comments, and quoted strings.
//! It stands in for a full YAML implementation, so it is deliberately
//! forgiving: lines it does not understand are skipped and files it cannot
//! read simply produce no document.
//!
//! # Parsing Pipeline
//!
//! 1. **Scanner**: Classifies each line as blank, comment, or content and
//!    measures its indentation.
//!
//! 2. **Indent-Stack Machine**: Opens and closes nested sections as
//!    indentation changes and inserts each entry into the innermost one.
//!
//! 3. **Scalar Normalizer**: Splits `key: value` at the first colon and
//!    strips one layer of quotes from the value.
//!
//! Around the parser sit the loaders that consume its output
//! ([`load_credentials`], [`load_integration_config`]) and [`save_meeting`],
//! which writes imported meetings out as Markdown notes.

mod credentials;
mod date;
mod dedupe;
mod error;
mod integration;
mod meeting;
mod parser;
mod scalar;
mod scanner;
mod slug;
mod template;
mod value;
mod workspace;
#[cfg(feature = "full-yaml")]
mod yaml;

use std::fs;
use std::path::Path;
use tracing::debug;

pub use credentials::{load_credentials, CredentialSources, CREDENTIAL_ENV_SUFFIXES};
pub use date::{format_duration, parse_date};
pub use dedupe::check_duplicate;
pub use error::{ReadError, SaveError, TemplateError};
pub use integration::{load_integration_config, load_integration_config_from, IntegrationConfig};
pub use meeting::{
    generate_filename, meeting_template_path, render_meeting, save_meeting, save_meeting_with,
    Meeting,
};
pub use scalar::{split_entry, unquote};
pub use scanner::{classify, Line};
pub use slug::{slugify, DEFAULT_SLUG_LENGTH};
pub use template::render_template;
pub use value::{ConfigValue, Document, Section};
pub use workspace::{find_workspace_root, is_workspace, workspace_root, WORKSPACE_ENV};

/// Parse a document from a string.
///
/// Never fails: unrecognized lines are dropped and an input with no entries
/// yields an empty document.
///
/// # Example
///
/// ```
/// use libarete::parse_str;
///
/// let doc = parse_str("parent:\n  child: value\n");
/// assert_eq!(doc.section("parent").unwrap().get_str("child"), Some("value"));
/// ```
pub fn parse_str(source: &str) -> Document {
    // Phase 1: Classify lines
    let lines = scanner::scan(source);

    // Phase 2: Build nested sections
    parser::parse_lines(&lines)
}

/// Parse a file with the fallback parser.
///
/// Returns `None` if the file is missing, unreadable, or not UTF-8.
pub fn parse(path: impl AsRef<Path>) -> Option<Document> {
    match read_source(path.as_ref()) {
        Ok(source) => Some(parse_str(&source)),
        Err(e) => {
            debug!(error = %e, "config file unavailable");
            None
        }
    }
}

/// Load a YAML file, using the full YAML parser when the `full-yaml`
/// feature is enabled and the fallback parser otherwise.
pub fn load_yaml(path: impl AsRef<Path>) -> Option<Document> {
    #[cfg(feature = "full-yaml")]
    {
        yaml::load(path.as_ref())
    }
    #[cfg(not(feature = "full-yaml"))]
    {
        parse(path)
    }
}

/// Read a whole file as UTF-8 text.
pub fn read_source(path: &Path) -> Result<String, ReadError> {
    fs::read_to_string(path).map_err(|e| ReadError::from_io(path.to_path_buf(), e))
}
