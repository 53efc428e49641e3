//! Service Status API Library
//!
//! Aggregates the operational status of external dependencies (CI, storage,
//! chat and database platforms) into one normalized feed served over HTTP.

pub mod config;
pub mod controllers;
pub mod errors;
pub mod logging;
pub mod models;
pub mod registry;
pub mod services;
pub mod state;

pub use config::{Cli, Config};
pub use errors::{Result, StatusError};
pub use models::service::{Mechanism, ResolverKind, ServiceConfig};
pub use models::status::{AggregateReport, Color, NormalizedStatus, StatusReading};
pub use registry::Registry;
pub use services::aggregator::Aggregator;
pub use services::resolver::StatusResolver;
pub use services::simulated::{RandomSource, SeededRandom, ThreadRandom};
pub use services::upstream::UpstreamClient;
pub use state::AppState;
