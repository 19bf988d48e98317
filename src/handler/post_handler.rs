use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Extension,
};
use std::sync::Arc;
use validator::Validate;

use crate::dto::post_dto::{
    AddCommentRequest, CreatePostRequest, PostListQuery, UpdatePostRequest,
};
use crate::dto::user_dto::MessageResponse;
use crate::handler::parse_object_id;
use crate::middlewares::auth_middleware::CurrentUser;
use crate::service::post_service::{PostService, PostServiceImpl};
use crate::util::error::HandlerError;

pub async fn list_posts_handler(
    State(service): State<Arc<PostServiceImpl>>,
    Query(query): Query<PostListQuery>,
) -> Result<impl IntoResponse, HandlerError> {
    let res = service.list(query).await?;
    Ok(Json(res))
}

pub async fn get_post_handler(
    State(service): State<Arc<PostServiceImpl>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "post")?;
    let res = service.get(id).await?;
    Ok(Json(res))
}

pub async fn create_post_handler(
    State(service): State<Arc<PostServiceImpl>>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<CreatePostRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::validation(format!("Validation error: {}", e)));
    }
    let res = service.create(user.id, payload).await?;
    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn update_post_handler(
    State(service): State<Arc<PostServiceImpl>>,
    Extension(user): Extension<CurrentUser>,
    Path((id,)): Path<(String,)>,
    Json(payload): Json<UpdatePostRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::validation(format!("Validation error: {}", e)));
    }
    let id = parse_object_id(&id, "post")?;
    let res = service.update(user.id, &user.role, id, payload).await?;
    Ok(Json(res))
}

pub async fn delete_post_handler(
    State(service): State<Arc<PostServiceImpl>>,
    Extension(user): Extension<CurrentUser>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "post")?;
    service.delete(user.id, &user.role, id).await?;
    Ok(Json(MessageResponse {
        message: "Post deleted".to_string(),
    }))
}

pub async fn add_comment_handler(
    State(service): State<Arc<PostServiceImpl>>,
    Extension(user): Extension<CurrentUser>,
    Path((id,)): Path<(String,)>,
    Json(payload): Json<AddCommentRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::validation(format!("Validation error: {}", e)));
    }
    let id = parse_object_id(&id, "post")?;
    let res = service.add_comment(user.id, id, payload).await?;
    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn delete_comment_handler(
    State(service): State<Arc<PostServiceImpl>>,
    Extension(user): Extension<CurrentUser>,
    Path((id, comment_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, HandlerError> {
    let post_id = parse_object_id(&id, "post")?;
    let comment_id = parse_object_id(&comment_id, "comment")?;
    service
        .delete_comment(user.id, &user.role, post_id, comment_id)
        .await?;
    Ok(Json(MessageResponse {
        message: "Comment deleted".to_string(),
    }))
}

pub async fn toggle_pin_handler(
    State(service): State<Arc<PostServiceImpl>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "post")?;
    let res = service.toggle_pin(id).await?;
    Ok(Json(res))
}
