//! Detecting meetings that were already saved.

use std::fs;
use std::path::Path;
use tracing::trace;

/// Whether a meeting already exists in `dir`.
///
/// A meeting exists if `dir/<filename>` is a file, or if any Markdown file
/// in `dir` records `**Meeting ID**: <meeting_id>`. Unreadable files are
/// skipped. A missing directory holds no duplicates.
pub fn check_duplicate(dir: &Path, meeting_id: Option<&str>, filename: Option<&str>) -> bool {
    if !dir.is_dir() {
        return false;
    }

    if let Some(name) = filename {
        if dir.join(name).is_file() {
            return true;
        }
    }

    let Some(id) = meeting_id else {
        return false;
    };
    let marker = format!("**Meeting ID**: {}", id);

    let Ok(entries) = fs::read_dir(dir) else {
        return false;
    };
    entries.flatten().map(|entry| entry.path()).any(|path| {
        if !path.is_file() || path.extension().map_or(true, |ext| ext != "md") {
            return false;
        }
        match fs::read_to_string(&path) {
            Ok(content) => content.contains(&marker),
            Err(e) => {
                trace!(path = %path.display(), error = %e, "skipping unreadable file");
                false
            }
        }
    })
}
