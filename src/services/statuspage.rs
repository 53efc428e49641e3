//! Resolver for Atlassian Statuspage feeds such as GitHub's

use crate::models::provider::StatuspageResponse;
use crate::models::service::ServiceConfig;
use crate::models::status::{Color, StatusReading};
use crate::services::resolver::{StatusResolver, reading_or_api_error};
use crate::services::upstream::UpstreamClient;
use async_trait::async_trait;

pub struct StatuspageResolver {
    upstream: UpstreamClient,
}

impl StatuspageResolver {
    pub fn new(upstream: UpstreamClient) -> Self {
        Self { upstream }
    }
}

/// Map a Statuspage indicator onto the normalized status.
pub fn map_indicator(indicator: &str, description: &str) -> (Color, String) {
    match indicator {
        "none" => (Color::Green, "Operational".to_string()),
        "minor" => (Color::Yellow, format!("Minor Issues: {}", description)),
        "major" => (Color::Orange, format!("Major Issues: {}", description)),
        "critical" => (Color::Red, format!("Critical Issues: {}", description)),
        _ => (Color::Grey, format!("Unknown status: {}", description)),
    }
}

#[async_trait]
impl StatusResolver for StatuspageResolver {
    async fn resolve(&self, service: &ServiceConfig) -> StatusReading {
        let outcome = self
            .upstream
            .get_json::<StatuspageResponse>(&service.query_url)
            .await
            .map(|payload| {
                let (color, message) =
                    map_indicator(&payload.status.indicator, &payload.status.description);
                StatusReading::new(color, message, service.public_url())
            });

        reading_or_api_error(service, outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::service::ResolverKind;
    use crate::models::status::API_ERROR_MESSAGE;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn service_at(server: &MockServer) -> ServiceConfig {
        ServiceConfig::api(
            "GitHub Actions",
            ResolverKind::Statuspage,
            format!("{}/api/v2/status.json", server.uri()),
            "https://www.githubstatus.com/",
        )
    }

    fn resolver(timeout: Duration) -> StatuspageResolver {
        StatuspageResolver::new(UpstreamClient::new(timeout).unwrap())
    }

    async fn serve(server: &MockServer, indicator: &str, description: &str) {
        Mock::given(method("GET"))
            .and(path("/api/v2/status.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "page": {"id": "kctbh9vrtdwd", "name": "GitHub"},
                "status": {"indicator": indicator, "description": description}
            })))
            .mount(server)
            .await;
    }

    #[test]
    fn test_indicator_table() {
        assert_eq!(
            map_indicator("none", "All Systems Operational"),
            (Color::Green, "Operational".to_string())
        );
        assert_eq!(
            map_indicator("minor", "Partially Degraded Service"),
            (Color::Yellow, "Minor Issues: Partially Degraded Service".to_string())
        );
        assert_eq!(
            map_indicator("major", "Partial System Outage"),
            (Color::Orange, "Major Issues: Partial System Outage".to_string())
        );
        assert_eq!(
            map_indicator("critical", "Outage"),
            (Color::Red, "Critical Issues: Outage".to_string())
        );
        assert_eq!(
            map_indicator("maintenance", "Scheduled Maintenance"),
            (Color::Grey, "Unknown status: Scheduled Maintenance".to_string())
        );
    }

    #[tokio::test]
    async fn test_operational() {
        let server = MockServer::start().await;
        serve(&server, "none", "All Systems Operational").await;

        let reading = resolver(Duration::from_secs(2)).resolve(&service_at(&server)).await;

        assert_eq!(reading.color, Color::Green);
        assert_eq!(reading.message, "Operational");
        assert_eq!(reading.url, "https://www.githubstatus.com/");
    }

    #[tokio::test]
    async fn test_critical() {
        let server = MockServer::start().await;
        serve(&server, "critical", "Outage").await;

        let reading = resolver(Duration::from_secs(2)).resolve(&service_at(&server)).await;

        assert_eq!(reading.color, Color::Red);
        assert_eq!(reading.message, "Critical Issues: Outage");
    }

    #[tokio::test]
    async fn test_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let reading = resolver(Duration::from_secs(2)).resolve(&service_at(&server)).await;

        assert_eq!(reading.color, Color::Grey);
        assert_eq!(reading.message, API_ERROR_MESSAGE);
        assert_eq!(reading.url, "https://www.githubstatus.com/");
    }

    #[tokio::test]
    async fn test_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"status": {"indicator": "none", "description": "ok"}}))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let reading = resolver(Duration::from_millis(200))
            .resolve(&service_at(&server))
            .await;

        assert_eq!(reading.color, Color::Grey);
        assert_eq!(reading.message, API_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_missing_fields() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": {"indicator": "none"}})))
            .mount(&server)
            .await;

        let reading = resolver(Duration::from_secs(2)).resolve(&service_at(&server)).await;

        assert_eq!(reading.color, Color::Grey);
        assert_eq!(reading.message, API_ERROR_MESSAGE);
    }
}
