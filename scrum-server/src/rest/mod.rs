pub mod controllers;
pub mod error;

pub use controllers::{AuthController, GithubController, ScrumController};
pub use error::ApiError;

use crate::ServerConfig;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Build CORS layer based on security configuration
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if config.security.allowed_origins.is_empty() {
        // Development mode: allow all origins (with warning logged at startup)
        cors.allow_origin(AllowOrigin::any())
    } else {
        // Production mode: only allow specified origins
        let origins: Vec<HeaderValue> =
            config.security.allowed_origins.iter().filter_map(|o| o.parse().ok()).collect();
        cors.allow_origin(origins)
    }
}

/// Create the server application.
pub fn create_app(config: ServerConfig) -> Router {
    let auth_controller =
        AuthController::new(config.user_store.clone(), config.tokens.clone());
    let scrum_controller = ScrumController::new(config.clone());
    let github_controller = GithubController::new(config.clone());

    let api_router = Router::new()
        .route("/health", get(health_check))
        .route("/auth/register", post(controllers::auth::register))
        .route("/auth/login", post(controllers::auth::login))
        .route("/auth/me", get(controllers::auth::me))
        .route("/auth/logout", post(controllers::auth::logout))
        .with_state(auth_controller)
        .route("/scrum/analyze", post(controllers::scrum::analyze))
        .route("/scrum/fix", post(controllers::scrum::fix))
        .with_state(scrum_controller)
        .route(
            "/github/oauth",
            get(controllers::github::oauth_query).post(controllers::github::oauth_exchange),
        )
        .route("/github/board", post(controllers::github::create_board))
        .with_state(github_controller);

    let app = Router::new().nest("/api", api_router);

    // Build security layers
    let cors_layer = build_cors_layer(&config);

    // Apply all middleware layers
    app.layer(
        ServiceBuilder::new()
            // Tracing for observability
            .layer(TraceLayer::new_for_http())
            // Request timeout
            .layer(TimeoutLayer::with_status_code(
                axum::http::StatusCode::REQUEST_TIMEOUT,
                config.security.request_timeout,
            ))
            // Request body size limit
            .layer(DefaultBodyLimit::max(config.security.max_body_size))
            // CORS configuration
            .layer(cors_layer)
            // Security headers
            .layer(SetResponseHeaderLayer::if_not_present(
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                header::X_FRAME_OPTIONS,
                HeaderValue::from_static("DENY"),
            )),
    )
}

async fn health_check() -> &'static str {
    "OK"
}
