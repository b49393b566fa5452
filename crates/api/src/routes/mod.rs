pub mod health;
pub mod samples;
pub mod valuation;

use axum::Router;

use crate::state::AppState;

/// Assemble all `/api/v1` routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/samples", samples::router())
        .nest("/valuations", valuation::router())
}
