use axum::routing::post;
use axum::Router;

use crate::handlers::valuation;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(valuation::valuate))
        .route("/narrative", post(valuation::valuate_narrative))
}
