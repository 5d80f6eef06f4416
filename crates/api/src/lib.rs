//! HTTP API layer with Axum routes for the intake forms.
//!
//! This crate provides:
//! - Contact and offer-request endpoints
//! - Multipart request decoding
//! - JSON response bodies
//! - CORS and request tracing

pub mod extractors;
pub mod response;
pub mod routes;

use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use formalogix_core::attachment::AttachmentHandler;
use formalogix_shared::{AppConfig, CorsConfig, Mailer};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Immutable configuration loaded at startup.
    pub config: Arc<AppConfig>,
    /// Outbound mail delivery.
    pub mailer: Arc<dyn Mailer>,
    /// Attachment storage for uploads.
    pub attachments: Arc<AttachmentHandler>,
}

impl AppState {
    /// Builds the state from configuration and a mailer.
    #[must_use]
    pub fn new(config: AppConfig, mailer: Arc<dyn Mailer>) -> Self {
        let attachments = AttachmentHandler::new(&config.upload);
        Self {
            config: Arc::new(config),
            mailer,
            attachments: Arc::new(attachments),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    let body_limit = usize::try_from(state.config.upload.max_request_bytes).unwrap_or(usize::MAX);

    Router::new()
        .merge(routes::health::routes())
        .nest("/api", routes::api_routes())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&state.config.cors))
        .with_state(state)
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let cors = config.clone();

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _request| {
                origin
                    .to_str()
                    .is_ok_and(|origin| cors.is_origin_allowed(origin))
            },
        ))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
