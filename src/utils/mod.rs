pub mod environment;
pub mod paths;
pub mod terminal;

pub use environment::{get_home_dir, resolve_sessions_dir};
pub use paths::{
    decode_project_dir, decode_project_dir_from, encode_project_path, format_path_with_tilde,
};
pub use terminal::{is_row_safe, sanitize_text};
