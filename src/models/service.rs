use serde::{Deserialize, Serialize};

/// How the status of a service is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mechanism {
    Api,
    ManualCheck,
}

/// Resolver implementation a service is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolverKind {
    /// Atlassian Statuspage `status.json` feeds (GitHub and friends)
    Statuspage,
    /// Slack's `api/v2.0.0/current` feed
    Slack,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ServiceConfig {
    pub name: String,
    pub mechanism: Mechanism,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolver: Option<ResolverKind>,
    pub query_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_page_url: Option<String>,
}

impl ServiceConfig {
    pub fn api(
        name: impl Into<String>,
        resolver: ResolverKind,
        query_url: impl Into<String>,
        status_page_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            mechanism: Mechanism::Api,
            resolver: Some(resolver),
            query_url: query_url.into(),
            status_page_url: Some(status_page_url.into()),
        }
    }

    pub fn manual(name: impl Into<String>, query_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mechanism: Mechanism::ManualCheck,
            resolver: None,
            query_url: query_url.into(),
            status_page_url: None,
        }
    }

    /// The page users should be sent to: the dedicated status page when one
    /// is recorded, the query URL otherwise.
    pub fn public_url(&self) -> &str {
        self.status_page_url.as_deref().unwrap_or(&self.query_url)
    }
}
