use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    Extension,
};
use std::sync::Arc;
use validator::Validate;

use crate::dto::user_dto::{LoginRequest, MessageResponse, SignupRequest};
use crate::middlewares::auth_middleware::CurrentUser;
use crate::service::user_service::{UserService, UserServiceImpl};
use crate::util::error::HandlerError;

pub async fn signup_handler(
    State(service): State<Arc<UserServiceImpl>>,
    Json(payload): Json<SignupRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::validation(format!("Validation error: {}", e)));
    }
    let res = service.register(payload).await?;
    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn login_handler(
    State(service): State<Arc<UserServiceImpl>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::validation(format!("Validation error: {}", e)));
    }
    let res = service.login(payload.email, payload.password).await?;
    Ok(Json(res))
}

/// Tokens are stateless, so logout only confirms the credential was valid;
/// the client discards its copy.
pub async fn logout_handler(
    Extension(user): Extension<CurrentUser>,
) -> Result<impl IntoResponse, HandlerError> {
    tracing::info!(user = %user.email, "User logged out");
    Ok(Json(MessageResponse {
        message: "Logged out".to_string(),
    }))
}
