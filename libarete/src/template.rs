//! `{placeholder}` substitution for Markdown templates.

use crate::error::TemplateError;
use std::fs;
use std::path::Path;

/// Render the template at `path`, replacing every `{name}` with the value
/// for `name`. Placeholders with no variable are left as written.
pub fn render_template<K, V>(path: &Path, variables: &[(K, V)]) -> Result<String, TemplateError>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    if !path.is_file() {
        return Err(TemplateError::NotFound(path.to_path_buf()));
    }
    let template = fs::read_to_string(path).map_err(|source| TemplateError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(substitute(template, variables))
}

fn substitute<K, V>(mut text: String, variables: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    for (key, value) in variables {
        let placeholder = format!("{{{}}}", key.as_ref());
        if text.contains(&placeholder) {
            text = text.replace(&placeholder, value.as_ref());
        }
    }
    text
}
