//! Simulated status for services without an integrated API

use crate::models::service::ServiceConfig;
use crate::models::status::{Color, StatusReading};
use crate::services::resolver::StatusResolver;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex};

/// Probability of reporting a simulated service as operational.
pub const OPERATIONAL_PROBABILITY: f64 = 0.85;

const DEGRADED_OUTCOMES: [(Color, &str); 3] = [
    (Color::Yellow, "Degraded (Simulated)"),
    (Color::Orange, "Partial Outage (Simulated)"),
    (Color::Red, "Major Outage (Simulated)"),
];

/// Source of randomness for the simulation.
pub trait RandomSource: Send + Sync {
    /// Uniform value in `[0, 1)`.
    fn unit(&self) -> f64;

    /// Uniform index in `0..len`. `len` is never zero.
    fn index(&self, len: usize) -> usize;
}

/// Per-thread RNG, used in production.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn unit(&self) -> f64 {
        rand::rng().random::<f64>()
    }

    fn index(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Reproducible RNG for tests and demos.
#[derive(Debug)]
pub struct SeededRandom(Mutex<StdRng>);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(Mutex::new(StdRng::seed_from_u64(seed)))
    }
}

impl RandomSource for SeededRandom {
    fn unit(&self) -> f64 {
        match self.0.lock() {
            Ok(mut rng) => rng.random::<f64>(),
            Err(poisoned) => poisoned.into_inner().random::<f64>(),
        }
    }

    fn index(&self, len: usize) -> usize {
        match self.0.lock() {
            Ok(mut rng) => rng.random_range(0..len),
            Err(poisoned) => poisoned.into_inner().random_range(0..len),
        }
    }
}

pub struct SimulatedResolver {
    random: Arc<dyn RandomSource>,
}

impl SimulatedResolver {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    fn draw(&self) -> (Color, &'static str) {
        if self.random.unit() < OPERATIONAL_PROBABILITY {
            (Color::Green, "Operational (Simulated)")
        } else {
            let pick = self.random.index(DEGRADED_OUTCOMES.len());
            DEGRADED_OUTCOMES[pick.min(DEGRADED_OUTCOMES.len() - 1)]
        }
    }
}

#[async_trait]
impl StatusResolver for SimulatedResolver {
    async fn resolve(&self, service: &ServiceConfig) -> StatusReading {
        let (color, message) = self.draw();
        StatusReading::new(color, message, service.public_url())
    }
}
