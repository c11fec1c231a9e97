use axum::Router;

use crate::state::AppState;

pub mod activity;
pub mod health;

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(activity::router(state))
}
