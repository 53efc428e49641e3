pub mod provider;
pub mod service;
pub mod status;
