use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use validator::Validate;

use crate::dto::contact_dto::ContactRequest;
use crate::dto::user_dto::MessageResponse;
use crate::handler::parse_object_id;
use crate::service::contact_service::{ContactService, ContactServiceImpl};
use crate::util::error::HandlerError;

pub async fn submit_contact_handler(
    State(service): State<Arc<ContactServiceImpl>>,
    Json(payload): Json<ContactRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::validation(format!("Validation error: {}", e)));
    }
    let res = service.submit(payload).await?;
    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn list_contact_handler(
    State(service): State<Arc<ContactServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let res = service.list().await?;
    Ok(Json(res))
}

pub async fn toggle_responded_handler(
    State(service): State<Arc<ContactServiceImpl>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "contact message")?;
    let res = service.toggle_responded(id).await?;
    Ok(Json(res))
}

pub async fn delete_contact_handler(
    State(service): State<Arc<ContactServiceImpl>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "contact message")?;
    service.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Contact message deleted".to_string(),
    }))
}
