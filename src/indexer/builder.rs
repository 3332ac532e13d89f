//! Session listing for Claude project directories.
//!
//! # Error Handling Strategy
//!
//! The listing follows a **graceful degradation** approach suitable for an fzf source:
//!
//! - **Root-level errors**: An unreadable sessions root is the only error returned.
//! - **Project-level errors**: A project directory that cannot be read is recorded in
//!   [`ProjectScan::unreadable`] and left out of the listing.
//! - **Undecodable names**: A directory whose encoded name matches nothing on disk, or
//!   resolves to a path with tabs or line breaks, is still listed with `project_path: None`.
//! - **File-level errors**: Transcripts whose metadata cannot be read are skipped, and
//!   unreadable transcripts produce an empty summary later on.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::indexer::project_discovery::{collect_sessions, discover_project_dirs};
use crate::models::ProjectGroup;
use crate::utils::{decode_project_dir, is_row_safe};

/// Result of one full scan of the sessions root
#[derive(Debug, Default)]
pub struct ProjectScan {
    /// Groups ordered by most recent session, newest first
    pub groups: Vec<ProjectGroup>,
    /// Project directories that could not be read, with the reason
    pub unreadable: Vec<(PathBuf, String)>,
}

impl ProjectScan {
    pub fn session_count(&self) -> usize {
        self.groups.iter().map(|group| group.sessions.len()).sum()
    }
}

/// Scan every project directory under `sessions_dir` and group its sessions
///
/// Directories without user-facing transcripts are left out. Sessions within a group
/// and the groups themselves are sorted newest first.
///
/// # Errors
///
/// Returns an error if `sessions_dir` cannot be read.
pub fn scan_projects(sessions_dir: &Path) -> Result<ProjectScan> {
    let mut scan = ProjectScan::default();

    for project in discover_project_dirs(sessions_dir)? {
        let mut sessions = match collect_sessions(&project.path) {
            Ok(sessions) => sessions,
            Err(e) => {
                scan.unreadable.push((project.path, format!("{:#}", e)));
                continue;
            }
        };
        if sessions.is_empty() {
            continue;
        }

        sessions.sort_by(|a, b| b.modified.cmp(&a.modified).then_with(|| a.id.cmp(&b.id)));

        scan.groups.push(ProjectGroup {
            project_path: decode_project_dir(&project.encoded_name)
                .filter(|path| is_row_safe(&path.to_string_lossy())),
            encoded_name: project.encoded_name,
            project_dir: project.path,
            sessions,
        });
    }

    scan.groups.sort_by(|a, b| {
        b.latest_modified()
            .cmp(&a.latest_modified())
            .then_with(|| a.encoded_name.cmp(&b.encoded_name))
    });

    Ok(scan)
}

/// Build the grouped session listing for `sessions_dir`
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use claude_sessions::list_groups;
///
/// let sessions_dir = PathBuf::from("/Users/alice/.claude/projects");
/// for group in list_groups(&sessions_dir)? {
///     println!("{}: {} sessions", group.encoded_name, group.sessions.len());
/// }
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn list_groups(sessions_dir: &Path) -> Result<Vec<ProjectGroup>> {
    scan_projects(sessions_dir).map(|scan| scan.groups)
}
