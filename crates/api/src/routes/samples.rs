use axum::routing::{get, put};
use axum::Router;

use crate::handlers::samples;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(samples::list_samples).post(samples::create_sample))
        .route(
            "/{id}",
            put(samples::update_sample).delete(samples::delete_sample),
        )
}
