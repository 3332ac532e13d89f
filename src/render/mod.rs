//! Text output for the fzf listing and preview pane
//!
//! Listing rows are `<display>\t<real-path>\t<session-id>`; fzf runs with `--with-nth=1`
//! so only the display field is shown and the other two are handed to the preview.
//! Header rows carry no tab payload.

pub mod age;
pub mod listing;
pub mod transcript;

pub use age::{format_age, format_age_at};
pub use listing::{
    FIELD_SEPARATOR, format_group_header, format_listing_line, render_listing, summary_label,
};
pub use transcript::{render_message, render_preview_header, render_transcript, wrap_text};
