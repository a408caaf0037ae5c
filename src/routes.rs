//! Route table shared by the binary and the integration tests.

use actix_web::error::JsonPayloadError;
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::errors::{AppError, ErrorResponse};
use crate::task;

#[derive(Debug, Serialize)]
struct HealthResponse {
    success: bool,
    message: &'static str,
    timestamp: DateTime<Utc>,
}

/// GET /health
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        success: true,
        message: "Server is up and running",
        timestamp: Utc::now(),
    })
}

/// Terminal handler for requests matching no route.
async fn route_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        success: false,
        message: "Route not found".to_string(),
        status_code: 404,
    })
}

/// Malformed or undeserializable JSON bodies become a 400 in the standard
/// error envelope instead of actix's default error body.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::bad_request(format!("Invalid request body: {}", err)).into()
}

/// Registers every route of the service on the given config.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/tasks")
                .route("", web::get().to(task::list_tasks))
                .route("", web::post().to(task::create_task))
                .route("/{id}", web::get().to(task::get_task))
                .route("/{id}", web::put().to(task::update_task))
                .route("/{id}", web::delete().to(task::delete_task)),
        )
        .default_service(web::route().to(route_not_found));
}
