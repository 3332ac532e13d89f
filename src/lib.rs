//! Claude Sessions - list and preview Claude conversation transcripts from fzf
//!
//! This library reads the session transcripts Claude keeps under
//! `~/.claude/projects/`. It supports:
//!
//! - Recovering real project paths from the hyphen-encoded directory names
//! - Lazily parsing JSONL transcripts into user/assistant messages
//! - Grouping sessions by project, newest first
//! - Rendering tab-delimited fzf rows and a wrapped, colored preview
//!
//! # Example
//!
//! ```no_run
//! use claude_sessions::list_groups;
//! use std::path::PathBuf;
//!
//! let sessions_dir = PathBuf::from("/Users/alice/.claude/projects");
//! let groups = list_groups(&sessions_dir)?;
//! println!("Found {} projects", groups.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod indexer;
pub mod models;
pub mod parsers;
pub mod render;
pub mod utils;

// Re-export commonly used types
pub use indexer::{find_session_file, list_groups, scan_projects};
pub use models::{Message, ProjectGroup, Role, Session};
pub use parsers::{first_user_text, read_transcript};
pub use utils::paths::{
    decode_project_dir, decode_project_dir_from, encode_project_path, format_path_with_tilde,
};
