pub mod analyze;
pub mod dataset;

use axum::Router;

use crate::state::AppState;

pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(dataset::router())
        .merge(analyze::router())
}
