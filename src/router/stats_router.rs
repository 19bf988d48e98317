use axum::{middleware, routing::get, Router};
use std::sync::Arc;

use crate::handler::stats_handler::dashboard_handler;
use crate::middlewares::auth_middleware::{admin_auth, AuthState};
use crate::service::stats_service::StatsServiceImpl;

pub fn stats_router(service: Arc<StatsServiceImpl>, auth_state: Arc<AuthState>) -> Router {
    Router::new()
        .route("/stats/dashboard", get(dashboard_handler))
        .route_layer(middleware::from_fn_with_state(auth_state, admin_auth))
        .with_state(service)
}
