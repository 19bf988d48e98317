use axum::{
    middleware,
    routing::{delete, get, patch, post},
    Router,
};
use std::sync::Arc;

use crate::handler::contact_handler::{
    delete_contact_handler, list_contact_handler, submit_contact_handler,
    toggle_responded_handler,
};
use crate::middlewares::auth_middleware::{admin_auth, AuthState};
use crate::service::contact_service::ContactServiceImpl;

pub fn contact_router(service: Arc<ContactServiceImpl>, auth_state: Arc<AuthState>) -> Router {
    // Guests submit without an account.
    let public = Router::new().route("/contact", post(submit_contact_handler));

    let admin = Router::new()
        .route("/contact", get(list_contact_handler))
        .route("/contact/{id}/responded", patch(toggle_responded_handler))
        .route("/contact/{id}", delete(delete_contact_handler))
        .route_layer(middleware::from_fn_with_state(auth_state, admin_auth));

    public.merge(admin).with_state(service)
}
