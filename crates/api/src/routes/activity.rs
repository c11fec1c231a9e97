use axum::{extract::State, routing::get, Json, Router};

use counter::DataNode;

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/activity", get(activity))
        .with_state(state)
}

/// Ranked per-user message counts for the visualization, ascending by
/// count. A failed aggregation cycle serves an empty array; the page
/// renders an empty dataset rather than an error.
async fn activity(State(state): State<AppState>) -> Json<Vec<DataNode>> {
    Json(state.cache.get_or_compute(state.slack.as_ref()).await)
}
