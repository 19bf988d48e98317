use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

use crate::service::stats_service::{StatsService, StatsServiceImpl};
use crate::util::error::HandlerError;

pub async fn dashboard_handler(
    State(service): State<Arc<StatsServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let res = service.dashboard().await?;
    Ok(Json(res))
}
