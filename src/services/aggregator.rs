//! Fan-out over the registry and assembly of the aggregate report

use crate::models::service::{Mechanism, ResolverKind, ServiceConfig};
use crate::models::status::{AggregateReport, Color, NormalizedStatus};
use crate::registry::Registry;
use crate::services::resolver::StatusResolver;
use crate::services::simulated::{RandomSource, SimulatedResolver};
use crate::services::slack::SlackResolver;
use crate::services::statuspage::StatuspageResolver;
use crate::services::upstream::UpstreamClient;
use futures::future::join_all;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, instrument};

pub struct Aggregator {
    registry: Registry,
    resolvers: HashMap<ResolverKind, Arc<dyn StatusResolver>>,
    simulated: Arc<dyn StatusResolver>,
}

impl Aggregator {
    /// Create an aggregator with every integrated resolver sharing `upstream`.
    pub fn new(registry: Registry, upstream: UpstreamClient, random: Arc<dyn RandomSource>) -> Self {
        let mut resolvers: HashMap<ResolverKind, Arc<dyn StatusResolver>> = HashMap::new();
        resolvers.insert(
            ResolverKind::Statuspage,
            Arc::new(StatuspageResolver::new(upstream.clone())),
        );
        resolvers.insert(ResolverKind::Slack, Arc::new(SlackResolver::new(upstream)));

        Self {
            registry,
            resolvers,
            simulated: Arc::new(SimulatedResolver::new(random)),
        }
    }

    /// Replace or remove the resolver bound to `kind`.
    pub fn with_resolver(mut self, kind: ResolverKind, resolver: Option<Arc<dyn StatusResolver>>) -> Self {
        match resolver {
            Some(resolver) => {
                self.resolvers.insert(kind, resolver);
            }
            None => {
                self.resolvers.remove(&kind);
            }
        }
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Pick the resolver for a service. API services without an available
    /// resolver fall back to simulation, like manual-check services.
    fn resolver_for(&self, service: &ServiceConfig) -> &dyn StatusResolver {
        let bound = match service.mechanism {
            Mechanism::Api => service.resolver.and_then(|kind| self.resolvers.get(&kind)),
            Mechanism::ManualCheck => None,
        };

        match bound {
            Some(resolver) => resolver.as_ref(),
            None => self.simulated.as_ref(),
        }
    }

    async fn resolve(&self, service: &ServiceConfig) -> NormalizedStatus {
        debug!("Resolving status for {} ({:?})", service.name, service.mechanism);
        let reading = self.resolver_for(service).resolve(service).await;
        NormalizedStatus::from(reading)
    }

    /// Resolve a single configured service by name.
    pub async fn resolve_service(&self, name: &str) -> Option<NormalizedStatus> {
        let service = self.registry.get(name)?;
        Some(self.resolve(service).await)
    }

    /// Resolve every registered service concurrently.
    #[instrument(skip(self))]
    pub async fn aggregate_all(&self) -> AggregateReport {
        let start_time = Instant::now();

        let statuses = join_all(self.registry.services().iter().map(|service| async move {
            (service.name.clone(), self.resolve(service).await)
        }))
        .await;

        let report: AggregateReport = statuses.into_iter().collect();

        info!(
            "Aggregated {} services in {}ms ({} operational, {} unavailable)",
            report.len(),
            start_time.elapsed().as_millis(),
            report.count_by_color(Color::Green),
            report.count_by_color(Color::Grey)
        );

        report
    }
}
