use actix_web::{error, get, post, web, HttpRequest, HttpResponse, Responder};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info};

use crate::api::models::{ErrorBody, RootMessage};
use crate::catalog::{Catalog, AUTHOR_NAME};
use crate::chat::{self, ChatRequest};
use crate::db::DocumentStore;

// --- Catalog ---

#[get("/")]
pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(RootMessage {
        message: format!("{} — The Infinite Scroll API", AUTHOR_NAME),
    })
}

#[get("/books")]
pub async fn list_books(catalog: web::Data<Catalog>) -> impl Responder {
    HttpResponse::Ok().json(catalog.books())
}

#[get("/tv")]
pub async fn list_tv(catalog: web::Data<Catalog>) -> impl Responder {
    HttpResponse::Ok().json(catalog.tv())
}

#[get("/site")]
pub async fn site_info(catalog: web::Data<Catalog>) -> impl Responder {
    HttpResponse::Ok().json(catalog.site())
}

// --- Chat ---

#[post("/chat")]
pub async fn chat_reply(
    store: web::Data<Arc<dyn DocumentStore>>,
    req: web::Json<ChatRequest>,
) -> impl Responder {
    let req = req.into_inner();
    debug!("Chat message for thread {:?}", req.thread_id);

    let response = chat::respond(store.get_ref().as_ref(), &req, &mut rand::thread_rng(), Utc::now());

    if response.slip {
        info!("Slip on page {} ({})", response.page_number, response.season);
    }

    HttpResponse::Ok().json(response)
}

/// Malformed JSON bodies become `400 {"error": ...}` instead of the default plain-text response.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
        let body = ErrorBody {
            error: err.to_string(),
        };
        error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).service(root).service(
        web::scope("/api")
            .service(list_books)
            .service(list_tv)
            .service(site_info)
            .service(chat_reply),
    );
}
