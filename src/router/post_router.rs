use axum::{
    middleware,
    routing::{delete, get, patch, post, put},
    Router,
};
use std::sync::Arc;

use crate::handler::post_handler::{
    add_comment_handler, create_post_handler, delete_comment_handler, delete_post_handler,
    get_post_handler, list_posts_handler, toggle_pin_handler, update_post_handler,
};
use crate::middlewares::auth_middleware::{admin_auth, authenticate, AuthState};
use crate::service::post_service::PostServiceImpl;

pub fn post_router(service: Arc<PostServiceImpl>, auth_state: Arc<AuthState>) -> Router {
    let public = Router::new()
        .route("/posts", get(list_posts_handler))
        .route("/posts/{id}", get(get_post_handler));

    let authed = Router::new()
        .route("/posts", post(create_post_handler))
        .route("/posts/{id}", put(update_post_handler))
        .route("/posts/{id}", delete(delete_post_handler))
        .route("/posts/{id}/comments", post(add_comment_handler))
        .route(
            "/posts/{id}/comments/{comment_id}",
            delete(delete_comment_handler),
        )
        .route_layer(middleware::from_fn_with_state(
            auth_state.clone(),
            authenticate,
        ));

    let admin = Router::new()
        .route("/posts/{id}/pin", patch(toggle_pin_handler))
        .route_layer(middleware::from_fn_with_state(auth_state, admin_auth));

    public.merge(authed).merge(admin).with_state(service)
}
