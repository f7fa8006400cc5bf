//! Plain-text rendering of documents for the terminal.
//!
//! Output is for reading only: keys are sorted, nested sections are
//! indented two spaces, and scalars are printed as-is without quoting, so
//! the result is not guaranteed to parse back to the same document.

use libarete::{ConfigValue, Section};

/// Indented `key: value` tree with sorted keys.
pub fn tree(section: &Section) -> String {
    let mut out = String::new();
    write_tree(section, 0, &mut out, &|s: &str| s.to_string());
    out
}

/// Like [`tree`], but every scalar is replaced by a mask that keeps at most
/// the last four characters.
pub fn masked(section: &Section) -> String {
    let mut out = String::new();
    write_tree(section, 0, &mut out, &mask);
    out
}

fn write_tree(
    section: &Section,
    depth: usize,
    out: &mut String,
    scalar: &dyn Fn(&str) -> String,
) {
    let pad = "  ".repeat(depth);
    for key in section.sorted_keys() {
        match section.get(key) {
            Some(ConfigValue::Scalar(s)) => {
                out.push_str(&format!("{}{}: {}\n", pad, key, scalar(s)));
            }
            Some(ConfigValue::Section(child)) if child.is_empty() => {
                out.push_str(&format!("{}{}: {{}}\n", pad, key));
            }
            Some(ConfigValue::Section(child)) => {
                out.push_str(&format!("{}{}:\n", pad, key));
                write_tree(child, depth + 1, out, scalar);
            }
            None => {}
        }
    }
}

fn mask(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{}", tail)
}
