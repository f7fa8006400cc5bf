//! Phase 2: Indent-Stack Machine
//!
//! The machine consumes content lines in order and builds the document.
//! It keeps a stack of open frames, one per section whose opener line
//! (`key:` with nothing after the colon) is still in scope:
//!
//! - A line indented no deeper than the top frame's opener closes that frame
//!   (repeatedly), so it lands beside the opener rather than under it.
//! - `key: value` inserts a scalar into the innermost open section.
//! - `key:` opens a new section and pushes a frame for it.
//! - A line without `:` is dropped.
//!
//! Each frame owns the section it is filling. Closing a frame moves that
//! section into its parent under the opener's key, so no two levels of the
//! tree are ever borrowed mutably at once.

use crate::scalar::{split_entry, unquote};
use crate::scanner::ScanLine;
use crate::value::{Document, Section};
use tracing::trace;

/// A section still receiving entries.
#[derive(Debug)]
struct Frame {
    /// Indentation of the opener line.
    indent: usize,
    /// Key the section is stored under in its parent.
    key: String,
    section: Section,
}

/// Builds a [`Document`] from content lines.
///
/// The root section sits below every frame and is never closed, which plays
/// the part of a root frame at an indentation shallower than any real line.
#[derive(Debug, Default)]
pub(crate) struct Builder {
    root: Section,
    open: Vec<Frame>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames on the stack, counting the root.
    #[cfg(test)]
    fn depth(&self) -> usize {
        self.open.len() + 1
    }

    /// Feed one content line.
    pub fn push_line(&mut self, indent: usize, text: &str) {
        self.close_to(indent);

        let Some((key, raw)) = split_entry(text) else {
            trace!(text, "dropping line without separator");
            return;
        };

        if raw.is_empty() {
            trace!(key, indent, "opening section");
            self.open.push(Frame {
                indent,
                key: key.to_string(),
                section: Section::new(),
            });
        } else {
            self.current().insert(key, unquote(raw));
        }
    }

    /// Close every open section and return the root.
    pub fn finish(mut self) -> Document {
        while !self.open.is_empty() {
            self.close_top();
        }
        self.root
    }

    /// Close frames whose opener is indented at or beyond `indent`.
    fn close_to(&mut self, indent: usize) {
        while self.open.last().is_some_and(|top| indent <= top.indent) {
            self.close_top();
        }
    }

    fn close_top(&mut self) {
        if let Some(frame) = self.open.pop() {
            trace!(key = %frame.key, entries = frame.section.len(), "closing section");
            self.current().insert(frame.key, frame.section);
        }
    }

    /// The section new entries go into.
    fn current(&mut self) -> &mut Section {
        match self.open.last_mut() {
            Some(frame) => &mut frame.section,
            None => &mut self.root,
        }
    }
}

/// Build a document from scanned content lines.
pub fn parse_lines(lines: &[ScanLine<'_>]) -> Document {
    let mut builder = Builder::new();
    for line in lines {
        trace!(line = line.line_num + 1, indent = line.indent, "content line");
        builder.push_line(line.indent, line.text);
    }
    builder.finish()
}
