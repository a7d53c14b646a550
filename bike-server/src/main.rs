use std::net::SocketAddr;

use bike_server::cache::{CachedRouteEstimator, RouteCacheConfig};
use bike_server::planner::PlanConfig;
use bike_server::routing::{RouteClient, RouteClientConfig};
use bike_server::snapshot::{
    MockSnapshotClient, SnapshotClient, SnapshotClientConfig, SnapshotSource,
};
use bike_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Station feed: a captured JSON file takes precedence for development
    let snapshot = match std::env::var("BIKE_SNAPSHOT_FILE") {
        Ok(path) => {
            println!("Serving snapshots from {path}");
            SnapshotSource::Mock(MockSnapshotClient::new(path))
        }
        Err(_) => {
            let feed_url = std::env::var("BIKE_FEED_URL").unwrap_or_else(|_| {
                eprintln!("Warning: BIKE_FEED_URL not set. Snapshot fetches will fail.");
                String::new()
            });
            let config = SnapshotClientConfig::new(feed_url);
            SnapshotSource::Live(
                SnapshotClient::new(config).expect("Failed to create snapshot client"),
            )
        }
    };

    // Route estimator client with cache
    let route_url = std::env::var("ROUTE_ESTIMATOR_URL").unwrap_or_else(|_| {
        eprintln!("Warning: ROUTE_ESTIMATOR_URL not set. Route estimates will fail.");
        String::new()
    });
    let route_client =
        RouteClient::new(RouteClientConfig::new(route_url)).expect("Failed to create route client");
    let estimator = CachedRouteEstimator::new(route_client, &RouteCacheConfig::default());

    // Build app state
    let state = AppState::new(snapshot, estimator, PlanConfig::default());

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Bike redistribution planner listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health             - Health check");
    println!("  GET  /api/stations       - Current snapshot with stock tiers");
    println!("  GET  /api/low            - Low-stock stations and donor shortlists");
    println!("  GET  /api/redistribution - Full redistribution plan with routes");
    println!("  POST /api/resupply       - Plan a manual resupply for one station");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
