use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const API_ERROR_MESSAGE: &str = "Could not fetch status (API Error)";

/// Normalized severity shared by every provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Green,
    Yellow,
    Orange,
    Red,
    Grey,
}

impl Color {
    pub const ALL: [Color; 5] = [
        Color::Green,
        Color::Yellow,
        Color::Orange,
        Color::Red,
        Color::Grey,
    ];

    /// Estimated uptime shown next to a status.
    pub fn uptime(self) -> &'static str {
        match self {
            Color::Green => "99.99%",
            Color::Yellow => "98.5%",
            Color::Orange | Color::Red | Color::Grey => "95.0%",
        }
    }
}

/// What a resolver reports, before the uptime estimate is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReading {
    pub color: Color,
    pub message: String,
    pub url: String,
}

impl StatusReading {
    pub fn new(color: Color, message: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            color,
            message: message.into(),
            url: url.into(),
        }
    }

    pub fn api_error(url: impl Into<String>) -> Self {
        Self::new(Color::Grey, API_ERROR_MESSAGE, url)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedStatus {
    pub color: Color,
    pub message: String,
    pub url: String,
    pub uptime: String,
}

impl From<StatusReading> for NormalizedStatus {
    fn from(reading: StatusReading) -> Self {
        Self {
            uptime: reading.color.uptime().to_string(),
            color: reading.color,
            message: reading.message,
            url: reading.url,
        }
    }
}

/// Service name to status, rebuilt on every request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AggregateReport(BTreeMap<String, NormalizedStatus>);

impl AggregateReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, service: String, status: NormalizedStatus) -> Option<NormalizedStatus> {
        self.0.insert(service, status)
    }

    pub fn get(&self, service: &str) -> Option<&NormalizedStatus> {
        self.0.get(service)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn count_by_color(&self, color: Color) -> usize {
        self.0.values().filter(|s| s.color == color).count()
    }
}

impl FromIterator<(String, NormalizedStatus)> for AggregateReport {
    fn from_iter<I: IntoIterator<Item = (String, NormalizedStatus)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
