use axum::{http::StatusCode, routing::get, Router};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod config;
pub mod handlers {
    pub mod health_handlers;
}

use config::ServerConfig;
use handlers::health_handlers;

pub fn build_router(config: &ServerConfig) -> Router {
    // Unknown /api paths answer 404 themselves, before the static fallback sees them.
    let api_routes = Router::new().nest(
        "/api",
        Router::new()
            .route("/health", get(health_handlers::health_check))
            .fallback(|| async { StatusCode::NOT_FOUND }),
    );

    // Everything outside /api belongs to the compiled landing page. Unknown paths get
    // index.html so client-side routes survive a reload.
    let app = match config.static_dir.as_ref() {
        Some(dir) if dir.is_dir() => {
            tracing::info!("Serving landing page from {}", dir.display());
            let index = ServeFile::new(dir.join("index.html"));
            api_routes.fallback_service(ServeDir::new(dir).fallback(index))
        }
        Some(dir) => {
            tracing::warn!("STATIC_DIR {} is not a directory, serving API only", dir.display());
            api_routes
        }
        None => api_routes,
    };

    app.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    )
    .layer(
        CorsLayer::new()
            .allow_methods([axum::http::Method::GET, axum::http::Method::OPTIONS])
            .allow_origin(AllowOrigin::exact(config.frontend_url.clone()))
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
                axum::http::header::ORIGIN,
            ]),
    )
}

#[cfg(test)]
#[path = "tests/router_tests.rs"]
mod tests;
