use anyhow::Result;

fn main() -> Result<()> {
    claude_sessions::cli::run()
}
