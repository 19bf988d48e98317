use axum::{
    middleware,
    routing::{get, put},
    Router,
};
use std::sync::Arc;

use crate::handler::user_handler::{get_user_handler, me_handler, update_me_handler};
use crate::middlewares::auth_middleware::{authenticate, AuthState};
use crate::service::user_service::UserServiceImpl;

pub fn user_router(service: Arc<UserServiceImpl>, auth_state: Arc<AuthState>) -> Router {
    let public = Router::new().route("/users/{id}", get(get_user_handler));

    let authed = Router::new()
        .route("/users/me", get(me_handler))
        .route("/users/me", put(update_me_handler))
        .route_layer(middleware::from_fn_with_state(auth_state, authenticate));

    public.merge(authed).with_state(service)
}
