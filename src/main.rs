pub mod api;
mod config;
mod fleet;
mod projection;

use axum::{routing::get, Router};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use config::Config;

#[derive(OpenApi)]
#[openapi(
    info(title = "Campus Bus API", version = "0.1.0"),
    paths(
        api::buses::list_buses,
        api::buses::get_arrivals_by_stop,
        api::buses::get_stop_projection,
        api::buses::update_wheelchair,
        api::buses::update_seats,
        api::buses::record_alighting,
        api::stops::list_stops,
        api::routes::list_route_directions,
        api::health::health_check,
    ),
    components(schemas(
        api::ErrorResponse,
        api::buses::BusSnapshot,
        api::buses::BusListResponse,
        api::buses::BusUpdateResponse,
        api::buses::StopArrivalsRequest,
        api::buses::Arrival,
        api::buses::StopArrivalsResponse,
        api::buses::StopProjectionRequest,
        api::buses::ProjectedStop,
        api::buses::StopProjectionResponse,
        api::buses::WheelchairUpdateRequest,
        api::buses::SeatsUpdateRequest,
        api::buses::AlightRequest,
        api::stops::StopListResponse,
        api::routes::RouteDirectionListResponse,
        api::health::HealthResponse,
        fleet::Seat,
        fleet::BusSelector,
        fleet::network::StopInfo,
        fleet::network::Direction,
        fleet::network::RouteDirection,
    )),
    tags(
        (name = "buses", description = "Live bus tracking and telemetry endpoints"),
        (name = "stops", description = "Stop information"),
        (name = "routes", description = "Canonical route directions"),
        (name = "health", description = "Service health check")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .init();

    // Load config
    let config = Config::load("config.yaml").expect("Failed to load config");

    // Build CORS layer based on config
    let cors_layer = if config.cors_permissive {
        tracing::warn!("CORS: Permissive mode explicitly enabled (all origins allowed) - DO NOT USE IN PRODUCTION");
        CorsLayer::permissive()
    } else if !config.cors_origins.is_empty() {
        tracing::info!(origins = ?config.cors_origins, "CORS: Restricting to configured origins");
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([axum::http::header::CONTENT_TYPE])
    } else {
        panic!("CORS configuration error: Either set 'cors_origins' with allowed origins, or set 'cors_permissive: true' for development");
    };

    // Seed the in-memory fleet
    let store = fleet::new_store(fleet::seed::demo_fleet());
    {
        let fleet = store.read().await;
        tracing::info!(
            buses = fleet.bus_count(),
            stops = fleet::network::stops().len(),
            route_directions = fleet::network::route_directions().len(),
            "Seeded in-memory fleet"
        );
    }

    // Build the app
    let app = Router::new()
        .route("/", get(root))
        .nest("/api", api::router(store))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind to {}: {e}", config.listen_addr));

    tracing::info!("Server running on http://{}", config.listen_addr);
    tracing::info!("Swagger UI: http://{}/swagger-ui", config.listen_addr);

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}

async fn root() -> &'static str {
    "Campus Bus API"
}
