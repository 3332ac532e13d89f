//! Session discovery for Claude project directories
//!
//! The sessions root (`~/.claude/projects` by default) holds one directory per working
//! directory, named with the lossy hyphen encoding from [`crate::utils::paths`]. Each
//! directory holds `<session-id>.jsonl` transcripts plus `agent-*.jsonl` files written by
//! sub-agents, which are never listed.
//!
//! - [`builder`] scans the root and produces ordered [`crate::models::ProjectGroup`]s.
//! - [`lookup`] finds the transcript for a selected row when rendering a preview.
//!
//! Every call re-scans the file system; nothing is cached between invocations.

pub mod builder;
pub mod lookup;
pub mod project_discovery;

pub use builder::{ProjectScan, list_groups, scan_projects};
pub use lookup::find_session_file;
pub use project_discovery::{ProjectDir, collect_sessions, discover_project_dirs, is_session_file};
