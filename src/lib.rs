use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::{get, post, put},
    Router,
};
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

use auth::rate_limit::RateLimitState;
use config::Config;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<Config>,
    pub rate_limiter: RateLimitState,
}

impl AppState {
    pub fn new(db: SqlitePool, config: Arc<Config>) -> Self {
        let rate_limiter = RateLimitState::new(
            config.auth_rate_limit_max,
            config.auth_rate_limit_window_secs,
        );
        Self {
            db,
            config,
            rate_limiter,
        }
    }
}

/// Build the full application router.
///
/// Auth endpoints sit behind the per-IP rate limiter, which reads
/// `ConnectInfo<SocketAddr>`; serve with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn router(state: AppState) -> Router {
    let auth_routes = Router::new()
        .route("/api/auth/register", post(handlers::auth::register))
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/api/auth/refresh", post(handlers::auth::refresh))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::rate_limit::rate_limit_auth,
        ));

    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz))
        .route(
            "/api/pets/:id/status",
            get(handlers::pets::pet_status).post(handlers::pets::pet_status),
        )
        .merge(auth_routes);

    // Each handler takes an `AuthUser`, so no guard layer is needed here.
    let pet_routes = Router::new()
        .route("/api/me", get(handlers::auth::me))
        .route("/api/auth/logout", post(handlers::auth::logout))
        .route(
            "/api/pets",
            get(handlers::pets::list_pets).post(handlers::pets::adopt_pet),
        )
        .route(
            "/api/pets/:id",
            put(handlers::pets::rename_pet).delete(handlers::pets::delete_pet),
        )
        .route("/api/pets/:id/action", post(handlers::pets::perform_action))
        .route("/api/pets/:id/nap", post(handlers::pets::nap))
        .route("/api/pets/:id/actions", get(handlers::pets::list_actions));

    Router::new()
        .merge(public_routes)
        .merge(pet_routes)
        .layer(cors_layer(&state.config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = std::iter::once(&config.frontend_url)
        .chain(config.cors_extra_origins.iter())
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(hv) => Some(hv),
            Err(_) => {
                tracing::warn!(origin = %o, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}
