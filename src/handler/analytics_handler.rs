use axum::{
    extract::{Json, Query, State},
    response::IntoResponse,
};
use std::sync::Arc;

use crate::dto::analytics_dto::{AnalyticsQuery, PageviewRequest, TimeRange};
use crate::service::analytics_service::{AnalyticsService, AnalyticsServiceImpl};
use crate::util::error::HandlerError;

/// Always responds 200; a lost pageview is not the client's problem.
pub async fn pageview_handler(
    State(service): State<Arc<AnalyticsServiceImpl>>,
    Json(payload): Json<PageviewRequest>,
) -> impl IntoResponse {
    Json(service.record_pageview(payload).await)
}

pub async fn analytics_data_handler(
    State(service): State<Arc<AnalyticsServiceImpl>>,
    Query(query): Query<AnalyticsQuery>,
) -> Result<impl IntoResponse, HandlerError> {
    let range = TimeRange::from_param(query.time_range.as_deref());
    let res = service.data(range).await?;
    Ok(Json(res))
}

pub async fn geographic_handler(
    State(service): State<Arc<AnalyticsServiceImpl>>,
    Query(query): Query<AnalyticsQuery>,
) -> Result<impl IntoResponse, HandlerError> {
    let range = TimeRange::from_param(query.time_range.as_deref());
    let res = service.geographic(range).await?;
    Ok(Json(res))
}
