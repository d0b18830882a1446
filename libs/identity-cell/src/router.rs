use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use shared_config::AppConfig;
use shared_utils::extractor::auth_middleware;

use crate::handlers::{self, IdentityState};
use crate::services::IdentityStore;

pub fn identity_routes(config: Arc<AppConfig>, store: IdentityStore) -> Router {
    let state = IdentityState {
        config: config.clone(),
        store,
    };

    let public_routes = Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login));

    let protected_routes = Router::new()
        .route("/profile", get(handlers::get_profile))
        .route("/users", get(handlers::list_users))
        .layer(middleware::from_fn_with_state(config, auth_middleware));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
}
