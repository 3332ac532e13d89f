//! Data models for Claude session listings and previews.
//!
//! - [`Session`] - One transcript file with its modification time and lazy summary
//! - [`ProjectGroup`] - A project directory's sessions, grouped for display
//! - [`Message`] - A speaker-tagged text extracted from a transcript
//! - [`TranscriptRecord`] - The raw JSONL record shape, deserialized with serde
//!
//! `message.content` is polymorphic in the transcript format, so it is modeled as the
//! untagged [`MessageContent`] enum (flat text or a list of typed blocks).

pub mod session;
pub mod transcript;

pub use session::{ProjectGroup, Session};
pub use transcript::{
    BlockSlot, ContentBlock, Message, MessageContent, RecordMessage, Role, TranscriptRecord,
};
