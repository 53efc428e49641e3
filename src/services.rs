pub mod aggregator;
pub mod resolver;
pub mod simulated;
pub mod slack;
pub mod statuspage;
pub mod upstream;
