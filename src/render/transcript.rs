use std::path::Path;

use crossterm::style::Stylize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::models::{Message, Role};
use crate::utils::format_path_with_tilde;
use crate::utils::terminal::{
    ASSISTANT_BADGE_BG, CYAN, GRAY, GREEN, USER_BADGE_BG, WHITE, paint, sanitize_text,
};

/// Column width of message text, sized for a ~45% fzf preview pane
pub const WRAP_WIDTH: usize = 42;

/// Continuation lines line up with the text after the badge
pub const HANGING_INDENT: usize = 9;

const SESSION_ID_PREFIX_LEN: usize = 8;

fn badge(role: Role) -> String {
    match role {
        Role::User => "  you  ".with(CYAN).on(USER_BADGE_BG).to_string(),
        Role::Assistant => " claude ".with(GREEN).on(ASSISTANT_BADGE_BG).to_string(),
    }
}

/// Greedy word wrap measured in terminal columns
///
/// The first line holds up to `width` columns; later lines start with `indent` spaces and
/// hold `width` columns including the indent. Runs of whitespace (newlines included)
/// collapse to single spaces and words wider than a line are split.
pub fn wrap_text(text: &str, width: usize, indent: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let mut rest = word;
        while !rest.is_empty() {
            let limit = (if lines.is_empty() { width } else { width.saturating_sub(indent) }).max(1);
            let rest_width = rest.width();
            let needed = if current.is_empty() { rest_width } else { current_width + 1 + rest_width };

            if needed <= limit {
                if !current.is_empty() {
                    current.push(' ');
                    current_width += 1;
                }
                current.push_str(rest);
                current_width += rest_width;
                break;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
                continue;
            }

            let split = split_at_width(rest, limit);
            lines.push(rest[..split].to_string());
            rest = &rest[split..];
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    let pad = " ".repeat(indent);
    lines
        .into_iter()
        .enumerate()
        .map(|(idx, line)| if idx == 0 { line } else { format!("{}{}", pad, line) })
        .collect()
}

/// Byte index where `word` first exceeds `limit` columns; always at least one character
fn split_at_width(word: &str, limit: usize) -> usize {
    let mut used = 0;
    for (idx, ch) in word.char_indices() {
        let ch_width = ch.width().unwrap_or(0);
        if idx > 0 && used + ch_width > limit {
            return idx;
        }
        used += ch_width;
    }
    word.len()
}

/// One display block: role badge, then the wrapped text
pub fn render_message(message: &Message) -> String {
    let text = sanitize_text(&message.text);
    let wrapped = wrap_text(&text, WRAP_WIDTH, HANGING_INDENT).join("\n");
    format!("{} {}", badge(message.role), paint(&wrapped, WHITE))
}

/// Display blocks for a whole transcript, in input order
///
/// Callers print a blank line after each block.
pub fn render_transcript(messages: &[Message]) -> Vec<String> {
    messages.iter().map(render_message).collect()
}

/// The two lines above a preview: short project path and the session id prefix
pub fn render_preview_header(
    project_path: &Path,
    session_id: &str,
    home: Option<&Path>,
) -> Vec<String> {
    let short_dir = format!(" {}", format_path_with_tilde(project_path, home));
    let id_prefix: String = session_id.chars().take(SESSION_ID_PREFIX_LEN).collect();
    let short_id = format!(" {}…", id_prefix);

    vec![paint(&short_dir, CYAN).to_string(), paint(&short_id, GRAY).to_string()]
}
