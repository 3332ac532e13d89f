use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::{Message, Role, TranscriptRecord};

/// Texts starting with this are injected markup (command output, reminders), not chat
const STRUCTURAL_MARKER: char = '<';

/// Lazily yields the chat messages of a transcript, in file order
///
/// Blank and malformed lines are skipped. Read errors are yielded as `Err` items so the
/// caller decides whether a partial transcript is acceptable.
pub struct TranscriptReader<R> {
    lines: Lines<R>,
    pending: VecDeque<Message>,
}

impl<R: BufRead> TranscriptReader<R> {
    pub fn new(reader: R) -> Self {
        Self { lines: reader.lines(), pending: VecDeque::new() }
    }
}

impl<R: BufRead> Iterator for TranscriptReader<R> {
    type Item = Result<Message>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(message) = self.pending.pop_front() {
                return Some(Ok(message));
            }

            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e).context("Failed to read line from transcript")),
            };

            let Some(record) = parse_record(&line) else {
                continue;
            };
            let Some(role) = record.role() else {
                continue;
            };

            self.pending.extend(
                record
                    .texts()
                    .into_iter()
                    .filter_map(qualifying_text)
                    .map(|text| Message { role, text: text.to_string() }),
            );
        }
    }
}

/// Open a transcript file for lazy parsing; each call starts from the beginning
pub fn read_transcript(path: &Path) -> Result<TranscriptReader<BufReader<File>>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open transcript: {}", path.display()))?;
    Ok(TranscriptReader::new(BufReader::new(file)))
}

/// First user message of a transcript with whitespace collapsed, or `""`
///
/// Stops at the first hit so large transcripts are not read in full. Any open or read
/// failure yields an empty string.
pub fn first_user_text(path: &Path) -> String {
    let Ok(file) = File::open(path) else {
        return String::new();
    };

    for line in BufReader::new(file).lines() {
        let Ok(line) = line else {
            return String::new();
        };
        let Some(record) = parse_record(&line) else {
            continue;
        };
        if record.role() != Some(Role::User) {
            continue;
        }
        if let Some(text) = record.texts().into_iter().find_map(qualifying_text) {
            return text.split_whitespace().collect::<Vec<_>>().join(" ");
        }
    }

    String::new()
}

fn parse_record(line: &str) -> Option<TranscriptRecord> {
    if line.trim().is_empty() {
        return None;
    }
    serde_json::from_str(line).ok()
}

/// Trimmed text, unless it is empty or structural markup
fn qualifying_text(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.starts_with(STRUCTURAL_MARKER) {
        None
    } else {
        Some(trimmed)
    }
}
