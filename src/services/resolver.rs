//! Resolver abstraction used by the aggregator to obtain one service's status

use crate::errors::Result;
use crate::models::service::ServiceConfig;
use crate::models::status::StatusReading;
use async_trait::async_trait;
use tracing::warn;

/// Produces the current status of a single service. Implementations never
/// fail: upstream problems are reported as a grey reading.
#[async_trait]
pub trait StatusResolver: Send + Sync {
    async fn resolve(&self, service: &ServiceConfig) -> StatusReading;
}

/// Turn the outcome of an upstream lookup into a reading.
///
/// On success the reading's url is pointed at the service's public page; on
/// failure the error is logged and replaced by the grey API error reading.
pub(crate) fn reading_or_api_error(
    service: &ServiceConfig,
    outcome: Result<StatusReading>,
) -> StatusReading {
    match outcome {
        Ok(mut reading) => {
            reading.url = service.public_url().to_string();
            reading
        }
        Err(e) => {
            warn!("Error fetching {} status: {}", service.name, e);
            StatusReading::api_error(service.public_url())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::StatusError;
    use crate::models::service::ResolverKind;
    use crate::models::status::{API_ERROR_MESSAGE, Color};

    fn github() -> ServiceConfig {
        ServiceConfig::api(
            "GitHub Actions",
            ResolverKind::Statuspage,
            "https://kctbh9vrtdwd.statuspage.io/api/v2/status.json",
            "https://www.githubstatus.com/",
        )
    }

    #[test]
    fn test_success_points_at_status_page() {
        let reading = reading_or_api_error(
            &github(),
            Ok(StatusReading::new(Color::Green, "Operational", "")),
        );

        assert_eq!(reading.color, Color::Green);
        assert_eq!(reading.url, "https://www.githubstatus.com/");
    }

    #[test]
    fn test_failure_becomes_grey() {
        let reading = reading_or_api_error(
            &github(),
            Err(StatusError::Upstream {
                status: 500,
                url: "https://kctbh9vrtdwd.statuspage.io/api/v2/status.json".to_string(),
            }),
        );

        assert_eq!(reading.color, Color::Grey);
        assert_eq!(reading.message, API_ERROR_MESSAGE);
        assert_eq!(reading.url, "https://www.githubstatus.com/");
    }
}
