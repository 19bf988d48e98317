use axum::{middleware, routing::post, Router};
use std::sync::Arc;

use crate::handler::auth_handler::{login_handler, logout_handler, signup_handler};
use crate::middlewares::auth_middleware::{authenticate, AuthState};
use crate::service::user_service::UserServiceImpl;

pub fn auth_router(service: Arc<UserServiceImpl>, auth_state: Arc<AuthState>) -> Router {
    let public = Router::new()
        .route("/auth/signup", post(signup_handler))
        .route("/auth/login", post(login_handler));

    // Logout needs a valid token but touches no server-side state.
    let authed = Router::new()
        .route("/auth/logout", post(logout_handler))
        .route_layer(middleware::from_fn_with_state(auth_state, authenticate));

    public.merge(authed).with_state(service)
}
