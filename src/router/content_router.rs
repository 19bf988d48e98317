use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::handler::content_handler::{bulk_action_handler, counts_handler, list_items_handler};
use crate::middlewares::auth_middleware::{admin_auth, AuthState};
use crate::service::content_service::ContentServiceImpl;

pub fn content_router(service: Arc<ContentServiceImpl>, auth_state: Arc<AuthState>) -> Router {
    Router::new()
        .route("/content/items", get(list_items_handler))
        .route("/content/bulk", post(bulk_action_handler))
        .route("/content/counts", get(counts_handler))
        .route_layer(middleware::from_fn_with_state(auth_state, admin_auth))
        .with_state(service)
}
