use axum::{
    middleware,
    routing::{delete, get, patch, post, put},
    Router,
};
use std::sync::Arc;

use crate::handler::project_handler::{
    create_project_handler, delete_project_handler, get_project_handler, list_projects_handler,
    toggle_feature_handler, update_project_handler,
};
use crate::middlewares::auth_middleware::{admin_auth, AuthState};
use crate::service::project_service::ProjectServiceImpl;

pub fn project_router(service: Arc<ProjectServiceImpl>, auth_state: Arc<AuthState>) -> Router {
    let public = Router::new()
        .route("/projects", get(list_projects_handler))
        .route("/projects/{id}", get(get_project_handler));

    let admin = Router::new()
        .route("/projects", post(create_project_handler))
        .route("/projects/{id}", put(update_project_handler))
        .route("/projects/{id}", delete(delete_project_handler))
        .route("/projects/{id}/feature", patch(toggle_feature_handler))
        .route_layer(middleware::from_fn_with_state(auth_state, admin_auth));

    public.merge(admin).with_state(service)
}
