//! JSONL parser for Claude session transcripts
//!
//! # Error Handling Strategy
//!
//! Transcripts are written by another program while this one reads them, so the parser
//! is deliberately forgiving:
//!
//! - **Individual line failures**: Malformed JSON and records that do not match the
//!   expected shape are skipped silently. A half-written final line is normal.
//!
//! - **I/O failures**: Full reads ([`read_transcript`]) surface read errors as `Err`
//!   items; the preview shows them in place of the transcript.
//!
//! - **Summaries**: [`first_user_text`] never fails. Anything that goes wrong becomes an
//!   empty summary, which the listing renders as a placeholder.

pub mod transcript;

pub use transcript::{TranscriptReader, first_user_text, read_transcript};
