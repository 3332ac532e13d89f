use std::path::Path;

use chrono::{DateTime, Utc};

use super::age::format_age_at;
use crate::models::{ProjectGroup, Session};
use crate::utils::format_path_with_tilde;
use crate::utils::terminal::{CYAN, GRAY, MAGENTA, WHITE, paint, sanitize_text};

/// Visible characters of a summary before it is ellipsized
pub const SUMMARY_BUDGET: usize = 58;
pub const ELLIPSIS: char = '…';
pub const EMPTY_PLACEHOLDER: &str = "(empty)";
pub const UNKNOWN_PROJECT: &str = "(unknown)";

/// Separates the visible label from the hidden payload in a listing row
pub const FIELD_SEPARATOR: char = '\t';

/// Summary text cut to [`SUMMARY_BUDGET`] characters plus an ellipsis; `None` when empty
pub fn summary_label(text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }
    if text.chars().count() <= SUMMARY_BUDGET {
        return Some(text.to_string());
    }

    let mut label: String = text.chars().take(SUMMARY_BUDGET).collect();
    label.push(ELLIPSIS);
    Some(label)
}

/// One session row: `<display-text>\t<real-path>\t<session-id>`
///
/// Only the display text carries color codes; fzf shows it and passes the other two
/// fields to the preview.
pub fn format_listing_line(session: &Session, target_path: &Path, now: &DateTime<Utc>) -> String {
    let age = format!("[{:>3}]", format_age_at(&session.modified, now));
    let label = match summary_label(&sanitize_text(session.first_message())) {
        Some(label) => paint(&label, WHITE).to_string(),
        None => paint(EMPTY_PLACEHOLDER, GRAY).to_string(),
    };

    format!(
        "    {}  {}{sep}{}{sep}{}",
        paint(&age, MAGENTA),
        label,
        target_path.display(),
        session.id,
        sep = FIELD_SEPARATOR
    )
}

/// Directory header row; carries no tab payload so selecting it does nothing
pub fn format_group_header(group: &ProjectGroup, home: &Path) -> String {
    let short = match &group.project_path {
        Some(path) => format_path_with_tilde(path, Some(home)),
        None => UNKNOWN_PROJECT.to_string(),
    };
    let count = format!("({})", group.sessions.len());

    format!("  {}  {}", paint(&short, CYAN), paint(&count, GRAY))
}

/// All rows of the listing: each group's header followed by its session rows
pub fn render_listing(groups: &[ProjectGroup], home: &Path, now: &DateTime<Utc>) -> Vec<String> {
    let mut lines = Vec::new();
    for group in groups {
        lines.push(format_group_header(group, home));
        let target = group.target_path(home);
        lines.extend(group.sessions.iter().map(|session| format_listing_line(session, target, now)));
    }
    lines
}
