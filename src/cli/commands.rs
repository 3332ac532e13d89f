use std::io::{self, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use chrono::Utc;
use clap::{Parser, Subcommand};

use crate::indexer::{find_session_file, scan_projects};
use crate::parsers::read_transcript;
use crate::render::{render_listing, render_preview_header, render_transcript};
use crate::utils::terminal::{MAGENTA, paint};
use crate::utils::{get_home_dir, resolve_sessions_dir};

#[derive(Parser)]
#[command(name = "claude-sessions")]
#[command(version)]
#[command(about = "List and preview Claude session transcripts for fzf", long_about = None)]
pub struct Cli {
    /// Sessions root [default: $CLAUDE_SESSIONS_DIR or ~/.claude/projects]
    #[arg(long, global = true, value_name = "DIR")]
    pub sessions_dir: Option<PathBuf>,

    /// Print warnings and a scan summary to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print one fzf row per session, grouped by project
    List,
    /// Render a session transcript for the fzf preview pane
    Preview {
        /// Project path from the selected row
        #[arg(allow_hyphen_values = true)]
        path: Option<String>,
        /// Session id from the selected row
        #[arg(allow_hyphen_values = true)]
        session_id: Option<String>,
        /// Extra fields fzf may pass along; ignored
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
        rest: Vec<String>,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::List) => {
            list_sessions(cli.sessions_dir.as_deref(), cli.verbose)?;
        }
        Some(Commands::Preview { path, session_id, .. }) => {
            let sessions_dir = resolve_sessions_dir(cli.sessions_dir.as_deref());
            let home = dirs::home_dir();
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            ignore_broken_pipe(preview_session(
                &mut out,
                sessions_dir,
                home.as_deref(),
                path.as_deref(),
                session_id.as_deref(),
            ))?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn list_sessions(sessions_dir_flag: Option<&Path>, verbose: bool) -> Result<()> {
    let sessions_dir = resolve_sessions_dir(sessions_dir_flag)?;
    if !sessions_dir.is_dir() {
        bail!("No claude projects directory found: {}", sessions_dir.display());
    }
    let home = get_home_dir()?;

    let scan = scan_projects(&sessions_dir)?;
    if verbose {
        for (path, reason) in &scan.unreadable {
            eprintln!("Warning: Skipping project directory {}: {}", path.display(), reason);
        }
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    ignore_broken_pipe(write_lines(&mut out, render_listing(&scan.groups, &home, &Utc::now())))?;

    if verbose {
        eprintln!(
            "Indexed {} sessions across {} projects ({} unreadable)",
            scan.session_count(),
            scan.groups.len(),
            scan.unreadable.len()
        );
    }

    Ok(())
}

/// Preview entry point; a sessions root that could not be resolved is reported inline
fn preview_session<W: Write>(
    out: &mut W,
    sessions_dir: Result<PathBuf>,
    home: Option<&Path>,
    path: Option<&str>,
    session_id: Option<&str>,
) -> io::Result<()> {
    match sessions_dir {
        Ok(sessions_dir) => write_preview(out, &sessions_dir, home, path, session_id),
        Err(e) => {
            writeln!(out, "Error reading session: {:#}", e)?;
            out.flush()
        }
    }
}

/// Write the preview for one selected row
///
/// Every outcome, including a missing or unreadable transcript, is a line of text on
/// `out`; only failures writing to `out` are returned.
pub fn write_preview<W: Write>(
    out: &mut W,
    sessions_dir: &Path,
    home: Option<&Path>,
    path: Option<&str>,
    session_id: Option<&str>,
) -> io::Result<()> {
    let selection = path.map(str::trim).zip(session_id.map(str::trim));
    let Some((path, session_id)) = selection.filter(|(_, id)| !id.is_empty()) else {
        writeln!(out, "No session selected.")?;
        return out.flush();
    };
    let project_path = PathBuf::from(path);

    let Some(transcript) = find_session_file(sessions_dir, &project_path, session_id) else {
        let message = format!("Session file not found: {}", session_id);
        writeln!(out, "{}", paint(&message, MAGENTA))?;
        return out.flush();
    };

    for line in render_preview_header(&project_path, session_id, home) {
        writeln!(out, "{}", line)?;
    }
    writeln!(out)?;

    let messages = read_transcript(&transcript).and_then(|reader| reader.collect::<Result<Vec<_>>>());
    match messages {
        Ok(messages) => {
            for block in render_transcript(&messages) {
                writeln!(out, "{}", block)?;
                writeln!(out)?;
            }
        }
        Err(e) => writeln!(out, "Error reading session: {:#}", e)?,
    }

    out.flush()
}

fn write_lines<W: Write>(out: &mut W, lines: Vec<String>) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

/// fzf closes its end of the pipe as soon as a selection is made
fn ignore_broken_pipe(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
