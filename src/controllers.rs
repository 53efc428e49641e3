use actix_web::web;

pub mod health;
pub mod status;

/// Register every route served by the API.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(status::index))
        .route("/health", web::get().to(health::health_check))
        .route("/api/services", web::get().to(status::list_services))
        .route("/api/status", web::get().to(status::get_all_statuses))
        .route("/api/status/{name}", web::get().to(status::get_service_status));
}
