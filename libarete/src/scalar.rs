//! Key/value splitting and quote stripping for content lines.

/// Split a content line at its first `:` into a trimmed key and raw value.
///
/// Returns `None` when the line has no separator. Quotes do not protect a
/// colon: `"a:b": c` splits inside the quoted key.
pub fn split_entry(text: &str) -> Option<(&str, &str)> {
    let (key, value) = text.split_once(':')?;
    Some((key.trim(), value.trim()))
}

/// Strip one layer of matching single or double quotes.
///
/// No escape processing happens inside the quotes.
pub fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
