use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RootMessage {
    pub message: String,
}

/// Store health as reported by `GET /test`. Informal, for operators only.
#[derive(Debug, Serialize)]
pub struct DiagnosticsReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}
