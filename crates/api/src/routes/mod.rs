//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod health;
pub mod submissions;

/// Creates the router mounted under `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(submissions::routes())
}
