use serde::Deserialize;
use serde::de::IgnoredAny;

/// Speaker of a transcript message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Maps a record's `type` field to a role; anything else is not a chat message
    pub fn from_record_type(record_type: &str) -> Option<Self> {
        match record_type {
            "user" => Some(Role::User),
            "assistant" => Some(Role::Assistant),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

/// One line of a transcript file
///
/// Only the fields needed for rendering are declared; everything else in the record
/// (uuids, timestamps, usage, snapshots) is ignored.
#[derive(Debug, Deserialize)]
pub struct TranscriptRecord {
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(default)]
    pub message: Option<RecordMessage>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RecordMessage {
    #[serde(default)]
    pub content: Option<MessageContent>,
}

/// `message.content` is either a plain string or an array of typed blocks
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Blocks(Vec<BlockSlot>),
}

/// A block the reader understands, or anything else in the array
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum BlockSlot {
    Known(ContentBlock),
    Unrecognized(IgnoredAny),
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum ContentBlock {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(other)]
    Other,
}

impl MessageContent {
    /// Raw text values in order: the string itself, or every `text` block
    pub fn texts(&self) -> Vec<&str> {
        match self {
            MessageContent::Text(text) => vec![text.as_str()],
            MessageContent::Blocks(blocks) => blocks
                .iter()
                .filter_map(|slot| match slot {
                    BlockSlot::Known(ContentBlock::Text { text }) => Some(text.as_str()),
                    _ => None,
                })
                .collect(),
        }
    }
}

impl TranscriptRecord {
    pub fn role(&self) -> Option<Role> {
        Role::from_record_type(&self.record_type)
    }

    pub fn texts(&self) -> Vec<&str> {
        self.message
            .as_ref()
            .and_then(|message| message.content.as_ref())
            .map(MessageContent::texts)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_content() {
        let json = r#"{"type":"user","message":{"role":"user","content":"hello"}}"#;
        let record: TranscriptRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.role(), Some(Role::User));
        assert_eq!(record.texts(), vec!["hello"]);
    }

    #[test]
    fn test_block_content_keeps_only_text_blocks() {
        let json = r#"{"type":"assistant","message":{"content":[
            {"type":"thinking","thinking":"hmm"},
            {"type":"text","text":"first"},
            {"type":"tool_use","id":"t1","name":"read","input":{}},
            {"type":"text","text":"second"}
        ]}}"#;
        let record: TranscriptRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.role(), Some(Role::Assistant));
        assert_eq!(record.texts(), vec!["first", "second"]);
    }

    #[test]
    fn test_ill_formed_blocks_are_ignored() {
        let json = r#"{"type":"user","message":{"content":[
            "bare string",
            {"no_type":true},
            {"type":"text","text":42},
            {"type":"text","text":"kept"}
        ]}}"#;
        let record: TranscriptRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.texts(), vec!["kept"]);
    }

    #[test]
    fn test_missing_message_has_no_texts() {
        let json = r#"{"type":"summary","summary":"x","leafUuid":"y"}"#;
        let record: TranscriptRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.role(), None);
        assert!(record.texts().is_empty());
    }
}
