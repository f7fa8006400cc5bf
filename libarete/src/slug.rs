//! Filename-safe slugs.

use regex::Regex;
use std::sync::OnceLock;

/// Slug length used when callers have no preference.
pub const DEFAULT_SLUG_LENGTH: usize = 50;

/// Slug returned when nothing usable is left of the input.
const FALLBACK: &str = "untitled";

fn separators() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\s_]+").expect("valid regex"))
}

fn disallowed() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9\-]").expect("valid regex"))
}

fn hyphen_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-+").expect("valid regex"))
}

/// Convert text to a lowercase, hyphen-separated slug of ASCII letters and
/// digits, at most `max_length` bytes long.
///
/// Truncation prefers to cut at the last hyphen inside the limit. Input with
/// no usable characters becomes `untitled`.
pub fn slugify(text: &str, max_length: usize) -> String {
    let slug = text.to_lowercase();
    let slug = separators().replace_all(&slug, "-");
    let slug = disallowed().replace_all(&slug, "");
    let slug = hyphen_runs().replace_all(&slug, "-");
    let mut slug = slug.trim_matches('-');

    if slug.len() > max_length {
        // Only ASCII survives the filters above, so byte slicing is safe.
        let truncated = &slug[..max_length];
        let truncated = match truncated.rfind('-') {
            Some(i) => &truncated[..i],
            None => truncated,
        };
        slug = truncated.trim_end_matches('-');
    }

    if slug.is_empty() {
        FALLBACK.to_string()
    } else {
        slug.to_string()
    }
}
