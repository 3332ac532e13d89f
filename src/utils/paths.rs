use std::ffi::OsString;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Marks a token that followed a doubled separator, i.e. a dot-prefixed component.
const HIDDEN_SENTINEL: char = '\0';

/// Encodes a file system path into Claude's project directory format
///
/// Both `/` and `.` become `-`, so a hidden component (`/.config`) ends up as `--config`.
/// The result is only a lookup hint: the encoding is lossy.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use claude_sessions::encode_project_path;
///
/// let path = PathBuf::from("/Users/foo/.config/bar");
/// assert_eq!(encode_project_path(&path), "-Users-foo--config-bar");
/// ```
pub fn encode_project_path(path: &Path) -> String {
    path.to_string_lossy().replace(['/', '.'], "-")
}

/// Decodes Claude's project directory format back to an existing file system path
///
/// A `-` in the encoded name is either a path separator or a literal hyphen, so the
/// real path is recovered by searching the file system from `/`. Returns `None` when
/// no combination of components exists on disk.
///
/// # Examples
///
/// ```no_run
/// use claude_sessions::decode_project_dir;
///
/// // Resolves to /home/alice/my-proj if that directory exists
/// let decoded = decode_project_dir("-home-alice-my-proj");
/// ```
pub fn decode_project_dir(encoded: &str) -> Option<PathBuf> {
    decode_project_dir_from(Path::new("/"), encoded)
}

/// Same as [`decode_project_dir`], but the search starts at `root` instead of `/`
pub fn decode_project_dir_from(root: &Path, encoded: &str) -> Option<PathBuf> {
    let tokens = tokenize(encoded);
    resolve(root, &tokens)
}

/// Splits an encoded name into path tokens, turning `--x` into `.x`
fn tokenize(encoded: &str) -> Vec<String> {
    let sentinel = format!("-{}", HIDDEN_SENTINEL);
    encoded
        .trim_start_matches('-')
        .replace("--", &sentinel)
        .split('-')
        .filter(|token| !token.is_empty())
        .map(|token| match token.strip_prefix(HIDDEN_SENTINEL) {
            Some(rest) => format!(".{}", rest),
            None => token.to_string(),
        })
        .collect()
}

/// Backtracking search: widest run of tokens first, shorter runs on failure
///
/// A run matches a child of `base` when both encode to the same text, so a run like
/// `alice-github-io` finds `alice.github.io` as well as `alice-github-io`.
fn resolve(base: &Path, tokens: &[String]) -> Option<PathBuf> {
    if tokens.is_empty() {
        return Some(base.to_path_buf());
    }

    let children = child_names(base);
    for width in (1..=tokens.len()).rev() {
        let run = tokens[..width].join("-");
        for component in matching_children(base, children.as_deref(), &run) {
            let candidate = base.join(&component);
            if candidate.exists()
                && let Some(resolved) = resolve(&candidate, &tokens[width..])
            {
                return Some(resolved);
            }
        }
    }

    None
}

/// Entry names of `base` in sorted order, `None` when it cannot be listed
fn child_names(base: &Path) -> Option<Vec<OsString>> {
    let mut names: Vec<OsString> =
        fs::read_dir(base).ok()?.flatten().map(|entry| entry.file_name()).collect();
    names.sort();
    Some(names)
}

/// Children whose encoded name equals the encoded run
///
/// Directories that can be searched but not listed fall back to the run itself.
fn matching_children(base: &Path, children: Option<&[OsString]>, run: &str) -> Vec<OsString> {
    match children {
        Some(names) => {
            let wanted = encode_component(run);
            names
                .iter()
                .filter(|name| encode_component(&name.to_string_lossy()) == wanted)
                .cloned()
                .collect()
        }
        None if is_plain_component(run) && base.join(run).exists() => vec![OsString::from(run)],
        None => Vec::new(),
    }
}

fn encode_component(name: &str) -> String {
    name.replace('.', "-")
}

/// Rejects anything that would not append exactly one normal component (`.`, `..`, NUL)
fn is_plain_component(component: &str) -> bool {
    if component.contains(HIDDEN_SENTINEL) {
        return false;
    }
    let mut components = Path::new(component).components();
    matches!((components.next(), components.next()), (Some(Component::Normal(_)), None))
}

/// Formats a path with ~ substitution for the home directory
///
/// Only whole leading components are replaced, so `/home/al` never shortens `/home/alice`.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use claude_sessions::format_path_with_tilde;
///
/// let formatted = format_path_with_tilde(Path::new("/home/alice/proj"), Some(Path::new("/home/alice")));
/// assert_eq!(formatted, "~/proj");
/// ```
pub fn format_path_with_tilde(path: &Path, home: Option<&Path>) -> String {
    if let Some(home) = home
        && let Ok(rest) = path.strip_prefix(home)
    {
        if rest.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~/{}", rest.display());
    }

    path.to_string_lossy().into_owned()
}
