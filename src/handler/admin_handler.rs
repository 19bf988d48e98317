use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
    Extension,
};
use std::sync::Arc;
use validator::Validate;

use crate::dto::admin_dto::{UpdateRoleRequest, UpdateStatusRequest};
use crate::dto::user_dto::MessageResponse;
use crate::handler::parse_object_id;
use crate::middlewares::auth_middleware::CurrentUser;
use crate::service::admin_service::{AdminService, AdminServiceImpl};
use crate::util::error::HandlerError;

pub async fn list_users_handler(
    State(service): State<Arc<AdminServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let res = service.list_users().await?;
    Ok(Json(res))
}

pub async fn delete_user_handler(
    State(service): State<Arc<AdminServiceImpl>>,
    Extension(caller): Extension<CurrentUser>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let target = parse_object_id(&id, "user")?;
    service.delete_user(&caller.id, &target).await?;
    Ok(Json(MessageResponse {
        message: "User deleted".to_string(),
    }))
}

pub async fn update_role_handler(
    State(service): State<Arc<AdminServiceImpl>>,
    Path((id,)): Path<(String,)>,
    Json(payload): Json<UpdateRoleRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::validation(format!("Validation error: {}", e)));
    }
    let id = parse_object_id(&id, "user")?;
    let res = service.update_role(&id, &payload.role).await?;
    Ok(Json(res))
}

pub async fn update_status_handler(
    State(service): State<Arc<AdminServiceImpl>>,
    Path((id,)): Path<(String,)>,
    Json(payload): Json<UpdateStatusRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::validation(format!("Validation error: {}", e)));
    }
    let id = parse_object_id(&id, "user")?;
    let res = service.update_status(&id, &payload.status).await?;
    Ok(Json(res))
}
