use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};

use shared_config::AppConfig;
use shared_utils::extractor::auth_middleware;

use crate::handlers::{self, SlotState};
use crate::services::SlotStore;

pub fn slot_routes(config: Arc<AppConfig>, store: SlotStore) -> Router {
    let state = SlotState {
        config: config.clone(),
        store,
    };

    let public_routes = Router::new()
        .route("/", get(handlers::list_slots))
        .route("/doctor/{id}", get(handlers::list_doctor_slots));

    let protected_routes = Router::new()
        .route("/", post(handlers::create_slot))
        .route("/{id}/unavailable", patch(handlers::mark_slot_unavailable))
        .layer(middleware::from_fn_with_state(config, auth_middleware));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
}
