use actix_web::{HttpResponse, Responder, http::header::ContentType, web};
use serde_json::json;
use tracing::info;

use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../../static/index.html");

// Static shell; the page fetches /api/status itself
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}

// Status of every configured service
pub async fn get_all_statuses(data: web::Data<AppState>) -> impl Responder {
    info!("Request for all service statuses");
    let report = data.aggregator.aggregate_all().await;

    HttpResponse::Ok().json(report)
}

// Status of a single service
pub async fn get_service_status(
    data: web::Data<AppState>,
    service_name: web::Path<String>,
) -> impl Responder {
    let name = service_name.into_inner();
    info!("Request for status of service: {}", name);

    match data.aggregator.resolve_service(&name).await {
        Some(status) => HttpResponse::Ok().json(status),
        None => HttpResponse::NotFound().json(json!({
            "error": format!("Service not configured: {}", name)
        })),
    }
}

// List all configured services
pub async fn list_services(data: web::Data<AppState>) -> impl Responder {
    info!("Request to list all services");
    let services = data.aggregator.registry().services();
    info!("Returning list of {} services", services.len());

    HttpResponse::Ok().json(services)
}
