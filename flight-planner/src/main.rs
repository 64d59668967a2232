use std::sync::Arc;

use flight_planner::cache::CachedPlanner;
use flight_planner::config::{NetworkSource, ServerConfig};
use flight_planner::fixture::{self, GeneratorConfig};
use flight_planner::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::from_env().expect("Invalid configuration");

    // Load or generate the network
    let network = match &config.source {
        NetworkSource::File(path) => {
            fixture::load_json(path).expect("Failed to load network fixture")
        }
        NetworkSource::Generated { routes, seed } => {
            let generator = GeneratorConfig::with_routes(*routes, *seed);
            let network = fixture::generate(&generator).expect("Failed to generate network");
            info!(
                seed,
                cities = network.graph().city_count(),
                routes = network.graph().route_count(),
                flights = network.timetable().len(),
                "serving generated network"
            );
            network
        }
    };

    // Build app state
    let planner = CachedPlanner::new(
        Arc::new(network),
        Arc::new(config.planner.clone()),
        &config.cache,
    );
    let state = AppState::new(planner);

    // Create router
    let app = create_router(state, &config.static_dir);

    // Bind and serve
    let addr = config.addr;
    info!("Flight Planner listening on http://{addr}");
    info!("API Endpoints:");
    info!("  GET  /health                                  - Health check");
    info!("  GET  /route?from=A&to=C                       - Plan a route");
    info!("  GET  /api/cities                              - List cities");
    info!("  GET  /api/timetable?origin=A&destination=B    - List flights");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
