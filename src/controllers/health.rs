use actix_web::{Responder, web};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
    started_at: DateTime<Utc>,
    uptime_seconds: i64,
}

// Health check endpoint
pub async fn health_check(data: web::Data<AppState>) -> impl Responder {
    web::Json(HealthResponse {
        status: "OK".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        started_at: data.started_at,
        uptime_seconds: (Utc::now() - data.started_at).num_seconds(),
    })
}
