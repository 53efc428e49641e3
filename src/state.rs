use chrono::{DateTime, Utc};

use crate::services::aggregator::Aggregator;

// App state
pub struct AppState {
    pub aggregator: Aggregator,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(aggregator: Aggregator) -> Self {
        Self {
            aggregator,
            started_at: Utc::now(),
        }
    }
}
