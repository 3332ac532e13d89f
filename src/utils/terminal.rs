//! Terminal output helpers
//!
//! # Security: Terminal Injection Prevention
//!
//! Transcript text is user-controlled and ends up verbatim in fzf rows and the preview
//! pane. Escape sequences in it could clear the screen, move the cursor or forge extra
//! tab-separated fields, so everything read from a transcript goes through
//! [`sanitize_text`] before it is styled.
//!
//! Colors use 256-color ANSI values via crossterm, which also honors `NO_COLOR`.

use crossterm::style::{Color, StyledContent, Stylize};

pub const CYAN: Color = Color::AnsiValue(45);
pub const MAGENTA: Color = Color::AnsiValue(201);
pub const GRAY: Color = Color::AnsiValue(242);
pub const GREEN: Color = Color::AnsiValue(84);
pub const WHITE: Color = Color::AnsiValue(252);
pub const USER_BADGE_BG: Color = Color::AnsiValue(18);
pub const ASSISTANT_BADGE_BG: Color = Color::AnsiValue(22);

/// Foreground-colored text
pub fn paint(text: &str, color: Color) -> StyledContent<&str> {
    text.with(color)
}

/// Whether `text` can be written as a hidden listing field without splitting the row
pub fn is_row_safe(text: &str) -> bool {
    !text.contains(['\t', '\n', '\r'])
}

/// Removes escape sequences and control characters from transcript text
///
/// CSI sequences (`ESC [ ... letter`) and OSC sequences (`ESC ] ... BEL` or `ESC \`) are
/// dropped whole. Remaining control characters other than newline are dropped, and tabs
/// become spaces so a sanitized value can never add a field to a listing row.
///
/// # Examples
///
/// ```
/// use claude_sessions::utils::terminal::sanitize_text;
///
/// assert_eq!(sanitize_text("\x1b[31mRed\x1b[0m\tdone"), "Red done");
/// ```
pub fn sanitize_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            match chars.peek() {
                Some('[') => {
                    chars.next();
                    for next_ch in chars.by_ref() {
                        if next_ch.is_ascii_alphabetic() {
                            break;
                        }
                    }
                }
                Some(']') => {
                    chars.next();
                    while let Some(next_ch) = chars.next() {
                        if next_ch == '\x07' {
                            break;
                        }
                        if next_ch == '\x1b' && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                _ => {}
            }
            continue;
        }

        match ch {
            '\t' => result.push(' '),
            '\n' => result.push('\n'),
            c if c.is_control() => {}
            c => result.push(c),
        }
    }

    result
}
