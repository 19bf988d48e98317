use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension,
};
use std::sync::Arc;
use validator::Validate;

use crate::dto::project_dto::{CreateProjectRequest, UpdateProjectRequest};
use crate::dto::user_dto::MessageResponse;
use crate::handler::parse_object_id;
use crate::middlewares::auth_middleware::CurrentUser;
use crate::service::project_service::{ProjectService, ProjectServiceImpl};
use crate::util::error::HandlerError;

pub async fn list_projects_handler(
    State(service): State<Arc<ProjectServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let res = service.list().await?;
    Ok(Json(res))
}

pub async fn get_project_handler(
    State(service): State<Arc<ProjectServiceImpl>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "project")?;
    let res = service.get(id).await?;
    Ok(Json(res))
}

pub async fn create_project_handler(
    State(service): State<Arc<ProjectServiceImpl>>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<CreateProjectRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::validation(format!("Validation error: {}", e)));
    }
    let res = service.create(user.id, payload).await?;
    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn update_project_handler(
    State(service): State<Arc<ProjectServiceImpl>>,
    Path((id,)): Path<(String,)>,
    Json(payload): Json<UpdateProjectRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::validation(format!("Validation error: {}", e)));
    }
    let id = parse_object_id(&id, "project")?;
    let res = service.update(id, payload).await?;
    Ok(Json(res))
}

pub async fn delete_project_handler(
    State(service): State<Arc<ProjectServiceImpl>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "project")?;
    service.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Project deleted".to_string(),
    }))
}

pub async fn toggle_feature_handler(
    State(service): State<Arc<ProjectServiceImpl>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "project")?;
    let res = service.toggle_feature(id).await?;
    Ok(Json(res))
}
