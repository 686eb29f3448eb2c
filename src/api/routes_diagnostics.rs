use actix_web::{get, web, HttpResponse, Responder};
use std::sync::Arc;

use crate::api::models::DiagnosticsReport;
use crate::config::{AppConfig, DatabaseConfig};
use crate::db::{DocumentStore, StoreError};

const ERROR_SNIPPET_CHARS: usize = 50;

fn set_flag(value: &Option<String>) -> String {
    let flag = if value.is_some() { "✅ Set" } else { "❌ Not Set" };
    flag.to_string()
}

pub fn build_report(store: &dyn DocumentStore, database: &DatabaseConfig) -> DiagnosticsReport {
    let (status, connection, collections) = match store.collections() {
        Ok(names) => ("✅ Connected & Working".to_string(), "Connected", names),
        Err(StoreError::Unavailable(_)) => ("❌ Not Available".to_string(), "Not Connected", Vec::new()),
        Err(e) => {
            let snippet: String = e.to_string().chars().take(ERROR_SNIPPET_CHARS).collect();
            (format!("⚠️  Connected but Error: {}", snippet), "Connected", Vec::new())
        }
    };

    DiagnosticsReport {
        backend: "✅ Running".to_string(),
        database: status,
        database_url: set_flag(&database.url),
        database_name: set_flag(&database.name),
        connection_status: connection.to_string(),
        collections,
    }
}

#[get("/test")]
pub async fn test_database(
    store: web::Data<Arc<dyn DocumentStore>>,
    config: web::Data<AppConfig>,
) -> impl Responder {
    HttpResponse::Ok().json(build_report(store.get_ref().as_ref(), &config.database))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(test_database);
}
