use std::cell::OnceCell;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::parsers::first_user_text;

/// One transcript file inside a project directory
#[derive(Debug, Clone)]
pub struct Session {
    /// File stem of the transcript
    pub id: String,
    pub transcript_path: PathBuf,
    pub modified: DateTime<Utc>,
    summary: OnceCell<String>,
}

impl Session {
    pub fn new(id: String, transcript_path: PathBuf, modified: DateTime<Utc>) -> Self {
        Self { id, transcript_path, modified, summary: OnceCell::new() }
    }

    /// First qualifying user message, read from disk on first access only
    pub fn first_message(&self) -> &str {
        self.summary.get_or_init(|| first_user_text(&self.transcript_path))
    }
}

/// All sessions of one project directory, newest first
#[derive(Debug, Clone)]
pub struct ProjectGroup {
    pub encoded_name: String,
    pub project_dir: PathBuf,
    /// `None` when the encoded name matched nothing on disk
    pub project_path: Option<PathBuf>,
    pub sessions: Vec<Session>,
}

impl ProjectGroup {
    pub fn latest_modified(&self) -> Option<DateTime<Utc>> {
        self.sessions.first().map(|session| session.modified)
    }

    /// Path handed to the consumer; falls back to `home` for undecodable names
    pub fn target_path<'a>(&'a self, home: &'a Path) -> &'a Path {
        self.project_path.as_deref().unwrap_or(home)
    }
}
