use axum::{
    middleware,
    routing::{delete, get, patch},
    Router,
};
use std::sync::Arc;

use crate::handler::admin_handler::{
    delete_user_handler, list_users_handler, update_role_handler, update_status_handler,
};
use crate::middlewares::auth_middleware::{admin_auth, AuthState};
use crate::service::admin_service::AdminServiceImpl;

pub fn admin_router(service: Arc<AdminServiceImpl>, auth_state: Arc<AuthState>) -> Router {
    Router::new()
        .route("/admin/users", get(list_users_handler))
        .route("/admin/users/{id}", delete(delete_user_handler))
        .route("/admin/users/{id}/role", patch(update_role_handler))
        .route("/admin/users/{id}/status", patch(update_status_handler))
        .route_layer(middleware::from_fn_with_state(auth_state, admin_auth))
        .with_state(service)
}
