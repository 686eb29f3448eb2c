use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use tracing::warn;

use crate::db::{ChatMessage, DocumentStore, StoreError, CHAT_MESSAGE_COLLECTION};

const FALLBACK_PAGES: i64 = 7;

/// Page number when nothing could be persisted: always in 1..=7.
pub fn fallback_page(now: DateTime<Utc>) -> u32 {
    (now.timestamp().rem_euclid(FALLBACK_PAGES) + 1) as u32
}

/// Stores the message and counts its thread. The count includes the message just written.
pub fn persist_and_count(store: &dyn DocumentStore, message: &ChatMessage) -> Result<u32, StoreError> {
    let record = serde_json::to_value(message)?;
    store.create(CHAT_MESSAGE_COLLECTION, &record)?;

    let thread_id = match &message.thread_id {
        Some(id) => id,
        None => return Ok(1),
    };

    let mut filter = Map::new();
    filter.insert("thread_id".to_string(), Value::String(thread_id.clone()));
    let existing = store.query(CHAT_MESSAGE_COLLECTION, &filter)?;

    Ok(existing.len() as u32 + 1)
}

/// Best-effort persistence. Store failures never reach the caller; they degrade to a clock-derived page.
pub fn record_message(store: &dyn DocumentStore, message: &ChatMessage, now: DateTime<Utc>) -> u32 {
    match persist_and_count(store, message) {
        Ok(page) => page,
        Err(e) => {
            warn!("Chat message not persisted ({}): {}", store.name(), e);
            fallback_page(now)
        }
    }
}
