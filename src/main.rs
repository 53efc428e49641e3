//! Service Status API Binary

use actix_web::{App, HttpServer, middleware, web};
use clap::Parser;
use service_status_api::{
    AppState, Aggregator, Cli, Config, Registry, Result, ThreadRandom, UpstreamClient,
    controllers, logging,
};
use std::sync::Arc;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    logging::init();

    info!("Starting Service Status API v{}", env!("CARGO_PKG_VERSION"));

    // Environment first, then command-line overrides
    let mut config = Config::from_env();
    Cli::parse().apply(&mut config);

    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        std::process::exit(1);
    }

    let registry = match &config.registry_path {
        Some(path) => Registry::from_file(path),
        None => Ok(Registry::builtin()),
    };
    let registry = match registry {
        Ok(registry) => registry,
        Err(e) => {
            error!("Failed to load service registry: {}", e);
            std::process::exit(1);
        }
    };

    info!(
        "Monitoring {} services, upstream timeout {}s",
        registry.len(),
        config.upstream_timeout.as_secs()
    );

    let upstream = UpstreamClient::new(config.upstream_timeout)?;
    let aggregator = Aggregator::new(registry, upstream, Arc::new(ThreadRandom));
    let state = web::Data::new(AppState::new(aggregator));

    info!("Server is live at http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::default())
            .configure(controllers::routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    info!("Service Status API shutdown complete");
    Ok(())
}
