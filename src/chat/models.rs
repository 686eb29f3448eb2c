use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// spring, summer, autumn or winter; anything else keeps the default tempo
    pub season: Option<String>,
    /// 0-1 depth of scroll
    pub depth: Option<f64>,
    pub username: Option<String>,
    pub thread_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    pub slip: bool,
    pub season: String,
    pub page_number: u32,
}
