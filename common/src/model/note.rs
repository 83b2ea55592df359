use serde::{Deserialize, Serialize};

/// A persisted note as the server returns it. The `id` is assigned by the
/// server on creation and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: i32,
    pub content: String,
}

/// Request body for creating or updating a note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteDraft {
    pub content: String,
}

/// One page of the note listing.
///
/// The server sends additional pagination bookkeeping (`total_count`,
/// `total_pages`, `page_index`); the board only needs the records and the
/// `taken` count, which signals the last page when it falls short of the
/// requested page size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotePage {
    pub content: Vec<Note>,
    pub taken: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_parses_server_payload_with_extra_fields() {
        let json = r#"{
            "content": [
                {"id": 7, "content": "hello"},
                {"id": 8, "content": "world"}
            ],
            "taken": 2,
            "total_count": 2,
            "total_pages": 0,
            "page_index": 0
        }"#;
        let page: NotePage = serde_json::from_str(json).unwrap();
        assert_eq!(page.taken, 2);
        assert_eq!(page.content.len(), 2);
        assert_eq!(page.content[0], Note { id: 7, content: "hello".into() });
    }

    #[test]
    fn draft_serializes_to_content_only() {
        let draft = NoteDraft { content: "shopping list".into() };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value, serde_json::json!({"content": "shopping list"}));
    }
}
