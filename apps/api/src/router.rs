use std::sync::Arc;

use axum::{routing::get, Router};

use identity_cell::router::identity_routes;
use identity_cell::services::IdentityStore;
use shared_config::AppConfig;
use slot_cell::router::slot_routes;
use slot_cell::services::SlotStore;

pub fn create_router(
    state: Arc<AppConfig>,
    identity_store: IdentityStore,
    slot_store: SlotStore,
) -> Router {
    Router::new()
        .route("/", get(|| async { "Slotbook API is running!" }))
        .nest("/auth", identity_routes(state.clone(), identity_store))
        .nest("/slots", slot_routes(state, slot_store))
}
