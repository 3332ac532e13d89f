use std::path::{Path, PathBuf};

use crate::indexer::project_discovery::{ProjectDir, TRANSCRIPT_EXTENSION, discover_project_dirs};
use crate::utils::encode_project_path;

/// Locate the transcript for `session_id`, using `project_path` as a hint
///
/// Directories whose name equals or starts with the encoded project path are tried
/// first; if none holds the transcript, every project directory is searched in name
/// order and the first match wins. An id that appears under several projects resolves
/// to whichever is found first.
///
/// Returns `None` when the transcript does not exist, the id is not a plain file
/// name, or the sessions root cannot be read.
pub fn find_session_file(
    sessions_dir: &Path,
    project_path: &Path,
    session_id: &str,
) -> Option<PathBuf> {
    if !is_valid_session_id(session_id) {
        return None;
    }

    let projects = discover_project_dirs(sessions_dir).ok()?;
    let file_name = format!("{}.{}", session_id, TRANSCRIPT_EXTENSION);
    let transcript_in = |project: &ProjectDir| {
        let candidate = project.path.join(&file_name);
        candidate.is_file().then_some(candidate)
    };

    let encoded = encode_project_path(project_path);
    let hinted = (encoded.len() > 1)
        .then(|| {
            projects
                .iter()
                .filter(|project| project.encoded_name.starts_with(&encoded))
                .find_map(transcript_in)
        })
        .flatten();

    hinted.or_else(|| projects.iter().find_map(transcript_in))
}

/// Session ids come from fzf rows; reject anything that could escape the project directory
fn is_valid_session_id(session_id: &str) -> bool {
    !session_id.is_empty()
        && session_id != "."
        && session_id != ".."
        && !session_id.contains(['/', '\\', '\0'])
}
