//! Saving imported meetings as Markdown notes.
//!
//! A meeting is rendered through the workspace template at
//! `templates/inputs/integration-meeting.md` and written to
//! `<dir>/<YYYY-MM-DD>-<title-slug>.md`. A meeting that is already on disk,
//! by filename or by its `**Meeting ID**` line, is skipped unless forced.

use crate::date::{format_duration, parse_date};
use crate::dedupe::check_duplicate;
use crate::error::{SaveError, TemplateError};
use crate::slug::{slugify, DEFAULT_SLUG_LENGTH};
use crate::template::render_template;
use crate::workspace::workspace_root;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Template location, relative to the workspace.
const TEMPLATE_PATH: [&str; 3] = ["templates", "inputs", "integration-meeting.md"];

/// One meeting as fetched from an integration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Meeting {
    pub title: String,
    /// Date as reported by the source, e.g. `2026-02-05T14:30:00Z`.
    pub date: String,
    pub id: String,
    pub duration_minutes: u32,
    /// Display name of the integration, e.g. `Fathom`.
    pub integration: String,
    pub attendees: Vec<String>,
    pub highlights: Vec<String>,
    pub action_items: Vec<String>,
    pub decisions: Vec<String>,
    pub summary: Option<String>,
    pub transcript: Option<String>,
    pub recording_url: String,
    pub source_url: String,
}

impl Meeting {
    /// The meeting date as `YYYY-MM-DD`, or today if it cannot be read.
    pub fn day(&self) -> String {
        parse_date(&self.date).unwrap_or_else(today)
    }

    /// Template variables, with placeholder text for empty lists.
    pub fn variables(&self) -> Vec<(&'static str, String)> {
        let title = if self.title.is_empty() {
            "Untitled Meeting".to_string()
        } else {
            self.title.clone()
        };
        vec![
            ("title", title),
            ("date", self.day()),
            ("duration", format_duration(self.duration_minutes)),
            ("integration", self.integration.clone()),
            ("import_date", today()),
            ("attendees", self.attendees.join(", ")),
            (
                "summary",
                self.summary
                    .clone()
                    .unwrap_or_else(|| "No summary available.".to_string()),
            ),
            (
                "key_points",
                bullets(&self.highlights, "- ", "No key points captured."),
            ),
            (
                "action_items",
                bullets(&self.action_items, "- [ ] ", "No action items captured."),
            ),
            (
                "decisions",
                bullets(&self.decisions, "- ", "No decisions captured."),
            ),
            (
                "transcript",
                self.transcript
                    .clone()
                    .unwrap_or_else(|| "No transcript available.".to_string()),
            ),
            ("meeting_id", self.id.clone()),
            ("recording_link", self.recording_url.clone()),
            ("source_link", self.source_url.clone()),
        ]
    }
}

fn bullets(items: &[String], marker: &str, empty: &str) -> String {
    if items.is_empty() {
        return empty.to_string();
    }
    items
        .iter()
        .map(|item| format!("{}{}", marker, item))
        .collect::<Vec<_>>()
        .join("\n")
}

fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// `<YYYY-MM-DD>-<title-slug>.md`.
pub fn generate_filename(meeting: &Meeting) -> String {
    format!(
        "{}-{}.md",
        meeting.day(),
        slugify(&meeting.title, DEFAULT_SLUG_LENGTH)
    )
}

/// Template path inside the resolved workspace.
pub fn meeting_template_path() -> PathBuf {
    TEMPLATE_PATH.iter().fold(workspace_root(), |p, c| p.join(c))
}

/// Render `meeting` through the template at `template`.
pub fn render_meeting(meeting: &Meeting, template: &Path) -> Result<String, TemplateError> {
    render_template(template, &meeting.variables())
}

/// Save `meeting` into `dir` using the workspace template.
///
/// Returns the written path, or `None` if the meeting was already saved.
pub fn save_meeting(
    meeting: &Meeting,
    dir: &Path,
    force: bool,
) -> Result<Option<PathBuf>, SaveError> {
    save_meeting_with(meeting, dir, &meeting_template_path(), force)
}

/// Save `meeting` into `dir` using an explicit template.
pub fn save_meeting_with(
    meeting: &Meeting,
    dir: &Path,
    template: &Path,
    force: bool,
) -> Result<Option<PathBuf>, SaveError> {
    let filename = generate_filename(meeting);
    let meeting_id = (!meeting.id.is_empty()).then_some(meeting.id.as_str());
    if !force && check_duplicate(dir, meeting_id, Some(&filename)) {
        debug!(filename = %filename, "meeting already saved, skipping");
        return Ok(None);
    }

    let content = render_meeting(meeting, template)?;
    let path = dir.join(&filename);
    fs::write(&path, content).map_err(|source| SaveError::Write {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), "saved meeting");
    Ok(Some(path))
}
