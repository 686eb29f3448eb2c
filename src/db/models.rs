use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const CHAT_MESSAGE_COLLECTION: &str = "chatmessage";

/// A stored record as the document store hands it back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: Uuid,
    pub collection: String,
    pub created_at: DateTime<Utc>,
    pub body: serde_json::Value,
}

/// One visitor message, persisted as-is into the `chatmessage` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub username: String,
    pub content: String,
    pub season: String,
    #[serde(default)]
    pub depth: f64,
    #[serde(default)]
    pub thread_id: Option<String>,
}
