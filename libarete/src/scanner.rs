//! Phase 1: Scanner
//!
//! The scanner classifies each physical line of the source:
//! - Blank lines (whitespace only) are skipped
//! - Comment lines (first non-whitespace character is `#`) are skipped
//! - Everything else becomes a content line with its indentation width
//!
//! Indentation is the number of leading whitespace characters. A tab counts
//! as one character, the same as a space.

/// Classification of a single physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    Comment,
    /// A line that may carry an entry.
    Content {
        /// Number of leading whitespace characters.
        indent: usize,
        /// Line text with surrounding whitespace removed.
        text: &'a str,
    },
}

/// A content line tagged with its position in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanLine<'a> {
    pub indent: usize,
    pub text: &'a str,
    /// Zero-based line number for diagnostics.
    pub line_num: usize,
}

/// Classify one line. The line may still carry its trailing newline.
pub fn classify(line: &str) -> Line<'_> {
    let text = line.trim();
    if text.is_empty() {
        return Line::Blank;
    }
    if text.starts_with('#') {
        return Line::Comment;
    }
    Line::Content {
        indent: count_indent(line),
        text,
    }
}

/// Scan source text into its content lines, dropping blanks and comments.
pub fn scan(source: &str) -> Vec<ScanLine<'_>> {
    source
        .lines()
        .enumerate()
        .filter_map(|(line_num, line)| match classify(line) {
            Line::Content { indent, text } => Some(ScanLine {
                indent,
                text,
                line_num,
            }),
            Line::Blank | Line::Comment => None,
        })
        .collect()
}

/// Count the leading whitespace characters of a line.
fn count_indent(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}
