use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::models::Session;
use crate::utils::is_row_safe;

/// Extension of transcript files
pub const TRANSCRIPT_EXTENSION: &str = "jsonl";

/// Stem prefix of sub-agent and background transcripts, which are not user conversations
pub const AGENT_FILE_PREFIX: &str = "agent-";

/// An encoded project directory directly under the sessions root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDir {
    pub encoded_name: String,
    pub path: PathBuf,
}

/// List the project directories under the sessions root, sorted by name
///
/// # Errors
///
/// Returns an error if the sessions root cannot be read. Entries that cannot be
/// inspected are skipped.
pub fn discover_project_dirs(sessions_dir: &Path) -> Result<Vec<ProjectDir>> {
    let entries = fs::read_dir(sessions_dir).with_context(|| {
        format!("Failed to read sessions directory: {}", sessions_dir.display())
    })?;

    let mut projects: Vec<ProjectDir> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .filter_map(|path| {
            let encoded_name = path.file_name()?.to_string_lossy().into_owned();
            Some(ProjectDir { encoded_name, path })
        })
        .collect();

    projects.sort_by(|a, b| a.encoded_name.cmp(&b.encoded_name));
    Ok(projects)
}

/// Whether `path` names a user-facing transcript (`<id>.jsonl`, not `agent-*`)
///
/// Ids containing tabs or line breaks are rejected; they could not be passed through a
/// listing row intact.
pub fn is_session_file(path: &Path) -> bool {
    let has_extension = path.extension().is_some_and(|ext| ext == TRANSCRIPT_EXTENSION);
    let stem_ok = path
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .is_some_and(|stem| {
            !stem.is_empty() && !stem.starts_with(AGENT_FILE_PREFIX) && is_row_safe(&stem)
        });
    has_extension && stem_ok
}

/// Collect the sessions directly inside one project directory, unsorted
///
/// Files whose metadata cannot be read are skipped.
///
/// # Errors
///
/// Returns an error if the project directory itself cannot be read.
pub fn collect_sessions(project_dir: &Path) -> Result<Vec<Session>> {
    let entries = fs::read_dir(project_dir).with_context(|| {
        format!("Failed to read project directory: {}", project_dir.display())
    })?;

    let sessions = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| is_session_file(path) && path.is_file())
        .filter_map(|path| {
            let modified = fs::metadata(&path).and_then(|meta| meta.modified()).ok()?;
            let id = path.file_stem()?.to_string_lossy().into_owned();
            Some(Session::new(id, path, DateTime::<Utc>::from(modified)))
        })
        .collect();

    Ok(sessions)
}
