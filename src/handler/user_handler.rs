use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
    Extension,
};
use std::sync::Arc;
use validator::Validate;

use crate::dto::user_dto::UpdateProfileRequest;
use crate::handler::parse_object_id;
use crate::middlewares::auth_middleware::CurrentUser;
use crate::service::user_service::{UserService, UserServiceImpl};
use crate::util::error::HandlerError;

pub async fn me_handler(
    State(service): State<Arc<UserServiceImpl>>,
    Extension(user): Extension<CurrentUser>,
) -> Result<impl IntoResponse, HandlerError> {
    let res = service.get_user(&user.id).await?;
    Ok(Json(res))
}

pub async fn update_me_handler(
    State(service): State<Arc<UserServiceImpl>>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::validation(format!("Validation error: {}", e)));
    }
    let res = service.update_profile(&user.id, payload).await?;
    Ok(Json(res))
}

pub async fn get_user_handler(
    State(service): State<Arc<UserServiceImpl>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "user")?;
    let res = service.get_user(&id).await?;
    Ok(Json(res))
}
