pub mod composer;
pub mod models;
pub mod pagination;

pub use composer::{compose_reply, ComposedReply};
pub use models::{ChatRequest, ChatResponse};
pub use pagination::record_message;

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::db::{ChatMessage, DocumentStore};

pub const DEFAULT_USERNAME: &str = "visitor";

impl ChatMessage {
    /// Record for a request, with `season` already normalized.
    pub fn from_request(req: &ChatRequest, season: &str) -> Self {
        Self {
            username: req
                .username
                .clone()
                .filter(|u| !u.is_empty())
                .unwrap_or_else(|| DEFAULT_USERNAME.to_string()),
            content: req.message.clone(),
            season: season.to_string(),
            depth: req.depth.unwrap_or(0.0).clamp(0.0, 1.0),
            thread_id: req.thread_id.clone().filter(|t| !t.is_empty()),
        }
    }
}

/// Full chat turn: compose a reply, then persist the message on a best-effort basis.
pub fn respond<R: Rng + ?Sized>(
    store: &dyn DocumentStore,
    req: &ChatRequest,
    rng: &mut R,
    now: DateTime<Utc>,
) -> ChatResponse {
    let composed = compose_reply(&req.message, req.season.as_deref(), rng);

    let message = ChatMessage::from_request(req, &composed.season);
    let page_number = record_message(store, &message, now);

    ChatResponse {
        reply: composed.reply,
        slip: composed.slip,
        season: composed.season,
        page_number,
    }
}
