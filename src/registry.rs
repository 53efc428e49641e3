//! Immutable registry of the services whose status is reported

use crate::errors::{Result, StatusError};
use crate::models::service::{ResolverKind, ServiceConfig};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone)]
pub struct Registry {
    services: Vec<ServiceConfig>,
}

impl Registry {
    /// Create a registry, rejecting entries that would break the report.
    pub fn new(services: Vec<ServiceConfig>) -> Result<Self> {
        if services.is_empty() {
            return Err(StatusError::Config(
                "at least one service must be configured".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for service in &services {
            if service.name.trim().is_empty() {
                return Err(StatusError::Config("service name cannot be empty".to_string()));
            }

            if !seen.insert(service.name.as_str()) {
                return Err(StatusError::Config(format!(
                    "duplicate service name: {}",
                    service.name
                )));
            }

            if service.query_url.trim().is_empty() {
                return Err(StatusError::Config(format!(
                    "query_url cannot be empty for {}",
                    service.name
                )));
            }

            if matches!(&service.status_page_url, Some(url) if url.trim().is_empty()) {
                return Err(StatusError::Config(format!(
                    "status_page_url cannot be empty for {}",
                    service.name
                )));
            }
        }

        Ok(Self { services })
    }

    /// The services monitored out of the box.
    pub fn builtin() -> Self {
        Self {
            services: vec![
                ServiceConfig::api(
                    "GitHub Actions",
                    ResolverKind::Statuspage,
                    "https://kctbh9vrtdwd.statuspage.io/api/v2/status.json",
                    "https://www.githubstatus.com/",
                ),
                ServiceConfig::manual("AWS S3", "https://status.aws.amazon.com/"),
                ServiceConfig::manual("Vercel", "https://status.vercel.com/"),
                ServiceConfig::api(
                    "Slack",
                    ResolverKind::Slack,
                    "https://status.slack.com/api/v2.0.0/current",
                    "https://status.slack.com/",
                ),
                ServiceConfig::manual("MongoDB Atlas", "https://status.cloud.mongodb.com/"),
            ],
        }
    }

    /// Load a registry from a JSON array of service definitions.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let services: Vec<ServiceConfig> = serde_json::from_str(&raw)?;
        let registry = Self::new(services)?;

        info!(
            "Loaded {} services from registry file {}",
            registry.len(),
            path.display()
        );

        Ok(registry)
    }

    pub fn services(&self) -> &[ServiceConfig] {
        &self.services
    }

    pub fn get(&self, name: &str) -> Option<&ServiceConfig> {
        self.services.iter().find(|s| s.name == name)
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}
