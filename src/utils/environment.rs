use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Environment variable overriding the sessions root
pub const SESSIONS_DIR_ENV: &str = "CLAUDE_SESSIONS_DIR";

/// Get the user's home directory
pub fn get_home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Could not determine home directory")
}

/// Resolve the root directory holding the encoded project directories
///
/// Precedence: explicit flag, then a non-empty `CLAUDE_SESSIONS_DIR`, then
/// `~/.claude/projects`.
pub fn resolve_sessions_dir(flag: Option<&Path>) -> Result<PathBuf> {
    let home = get_home_dir()?;
    Ok(resolve_sessions_dir_with(flag, env::var(SESSIONS_DIR_ENV).ok().as_deref(), &home))
}

pub(crate) fn resolve_sessions_dir_with(
    flag: Option<&Path>,
    env_value: Option<&str>,
    home: &Path,
) -> PathBuf {
    if let Some(dir) = flag {
        return expand_tilde(&dir.to_string_lossy(), home);
    }

    match env_value.map(str::trim) {
        Some(value) if !value.is_empty() => expand_tilde(value, home),
        _ => home.join(".claude").join("projects"),
    }
}

fn expand_tilde(raw: &str, home: &Path) -> PathBuf {
    if raw == "~" {
        return home.to_path_buf();
    }
    match raw.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None => PathBuf::from(raw),
    }
}
