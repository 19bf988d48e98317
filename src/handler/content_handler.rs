use axum::{
    extract::{Json, Query, State},
    response::IntoResponse,
};
use std::sync::Arc;
use validator::Validate;

use crate::dto::content_dto::{BulkActionRequest, ContentQuery};
use crate::service::content_service::{ContentService, ContentServiceImpl};
use crate::util::error::HandlerError;

pub async fn list_items_handler(
    State(service): State<Arc<ContentServiceImpl>>,
    Query(query): Query<ContentQuery>,
) -> Result<impl IntoResponse, HandlerError> {
    let res = service.list_items(query).await?;
    Ok(Json(res))
}

pub async fn bulk_action_handler(
    State(service): State<Arc<ContentServiceImpl>>,
    Json(payload): Json<BulkActionRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::validation(format!("Validation error: {}", e)));
    }
    let res = service.bulk_action(payload).await?;
    Ok(Json(res))
}

pub async fn counts_handler(
    State(service): State<Arc<ContentServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let res = service.counts().await?;
    Ok(Json(res))
}
