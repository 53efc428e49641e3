//! Resolver for Slack's status API

use crate::models::provider::SlackCurrentResponse;
use crate::models::service::ServiceConfig;
use crate::models::status::{Color, StatusReading};
use crate::services::resolver::{StatusResolver, reading_or_api_error};
use crate::services::upstream::UpstreamClient;
use async_trait::async_trait;

pub struct SlackResolver {
    upstream: UpstreamClient,
}

impl SlackResolver {
    pub fn new(upstream: UpstreamClient) -> Self {
        Self { upstream }
    }
}

pub fn map_health(status: &str) -> (Color, String) {
    match status {
        "ok" => (Color::Green, "Operational".to_string()),
        "degraded" => (Color::Yellow, "Degraded performance".to_string()),
        "outage" => (Color::Red, "Major Outage".to_string()),
        other => (Color::Grey, format!("Unknown status: {}", other)),
    }
}

#[async_trait]
impl StatusResolver for SlackResolver {
    async fn resolve(&self, service: &ServiceConfig) -> StatusReading {
        let outcome = self
            .upstream
            .get_json::<SlackCurrentResponse>(&service.query_url)
            .await
            .map(|payload| {
                let (color, message) = map_health(&payload.status);
                StatusReading::new(color, message, service.public_url())
            });

        reading_or_api_error(service, outcome)
    }
}
