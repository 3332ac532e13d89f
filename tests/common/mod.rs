//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use serde_json::json;
use tempfile::TempDir;

/// Builder for a sessions root with encoded project directories
pub struct SessionsDirBuilder {
    temp_dir: TempDir,
}

impl SessionsDirBuilder {
    /// Create a new builder with an empty sessions root
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the sessions root
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a project directory with the given encoded name and transcripts
    pub fn with_project(self, encoded_name: &str, transcripts: &[TranscriptBuilder]) -> Self {
        let project_dir = self.temp_dir.path().join(encoded_name);
        fs::create_dir_all(&project_dir).expect("Failed to create project dir");

        for transcript in transcripts {
            transcript.create_in(&project_dir);
        }

        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for SessionsDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one `<session-id>.jsonl` transcript
pub struct TranscriptBuilder {
    file_name: String,
    lines: Vec<String>,
    age: Duration,
}

impl TranscriptBuilder {
    /// Create a transcript for the given session id
    pub fn new(session_id: &str) -> Self {
        Self {
            file_name: format!("{}.jsonl", session_id),
            lines: Vec::new(),
            age: Duration::from_secs(60),
        }
    }

    /// Create a transcript with an arbitrary file name (e.g. `agent-1.jsonl`)
    pub fn named(file_name: &str) -> Self {
        Self { file_name: file_name.to_string(), ..Self::new("unused") }
    }

    /// Add a user record with string content
    pub fn user(mut self, text: &str) -> Self {
        self.lines.push(json!({"type": "user", "message": {"role": "user", "content": text}}).to_string());
        self
    }

    /// Add an assistant record with a single text block
    pub fn assistant(mut self, text: &str) -> Self {
        self.lines.push(
            json!({
                "type": "assistant",
                "message": {"role": "assistant", "content": [{"type": "text", "text": text}]}
            })
            .to_string(),
        );
        self
    }

    /// Add a raw line verbatim
    pub fn raw(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Set how long ago the transcript was last modified
    pub fn age_secs(mut self, secs: u64) -> Self {
        self.age = Duration::from_secs(secs);
        self
    }

    /// Write the transcript into `dir` and backdate its modification time
    pub fn create_in(&self, dir: &Path) -> PathBuf {
        let path = dir.join(&self.file_name);
        let mut content = self.lines.join("\n");
        content.push('\n');
        fs::write(&path, content).expect("Failed to write transcript");
        set_age(&path, self.age);
        path
    }
}

/// Set a file's modification time to `age` before now
pub fn set_age(path: &Path, age: Duration) {
    let file = File::options().write(true).open(path).expect("Failed to open file");
    file.set_modified(SystemTime::now() - age).expect("Failed to set mtime");
}

/// Create a real directory tree and return the encoded name Claude would give it
pub fn real_project(root: &Path, relative: &str) -> (PathBuf, String) {
    let path = root.join(relative);
    fs::create_dir_all(&path).expect("Failed to create project path");
    let encoded = claude_sessions::encode_project_path(&path);
    (path, encoded)
}

/// Removes ANSI sequences so assertions can match visible text
pub fn visible(text: &str) -> String {
    claude_sessions::utils::sanitize_text(text)
}
