use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::handler::analytics_handler::{
    analytics_data_handler, geographic_handler, pageview_handler,
};
use crate::middlewares::auth_middleware::{admin_auth, AuthState};
use crate::service::analytics_service::AnalyticsServiceImpl;

pub fn analytics_router(service: Arc<AnalyticsServiceImpl>, auth_state: Arc<AuthState>) -> Router {
    // Every page load fires this, authenticated or not.
    let public = Router::new().route("/analytics/pageview", post(pageview_handler));

    let admin = Router::new()
        .route("/analytics/data", get(analytics_data_handler))
        .route("/analytics/geographic", get(geographic_handler))
        .route_layer(middleware::from_fn_with_state(auth_state, admin_auth));

    public.merge(admin).with_state(service)
}
