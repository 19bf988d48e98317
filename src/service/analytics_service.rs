use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::analytics_dto::{
    AnalyticsDataResponse, GeographicResponse, PageviewRequest, PageviewResponse, TimeRange,
};
use crate::model::visit::{device_type_from_user_agent, GeoLocation, Visit};
use crate::repository::repository_error::RepositoryResult;
use crate::repository::visit_repo::VisitRepository;
use crate::util::error::ServiceError;
use crate::util::fallback;

const TOP_PAGES_LIMIT: i64 = 6;

#[async_trait]
pub trait AnalyticsService: Send + Sync {
    /// Fire-and-forget telemetry: the response is always a success, even when
    /// the insert fails.
    async fn record_pageview(&self, request: PageviewRequest) -> PageviewResponse;
    async fn data(&self, range: TimeRange) -> Result<AnalyticsDataResponse, ServiceError>;
    async fn geographic(&self, range: TimeRange) -> Result<GeographicResponse, ServiceError>;
}

pub struct AnalyticsServiceImpl {
    pub visit_repo: Arc<dyn VisitRepository>,
}

impl AnalyticsServiceImpl {
    pub fn new(visit_repo: Arc<dyn VisitRepository>) -> Self {
        Self { visit_repo }
    }

    async fn gather(&self, range: TimeRange) -> RepositoryResult<AnalyticsDataResponse> {
        let start = bson::DateTime::from_chrono(range.start_from(Utc::now()));
        let (total_visits, unique_visitors) = self.visit_repo.totals(start).await?;
        let daily_traffic = self.visit_repo.daily_traffic(start).await?;
        let top_pages = self.visit_repo.top_pages(start, TOP_PAGES_LIMIT).await?;
        let device_breakdown = self.visit_repo.device_breakdown(start).await?;
        Ok(AnalyticsDataResponse {
            time_range: range.as_str().to_string(),
            total_visits,
            unique_visitors,
            // Trend hint only; never computed from the previous period.
            change_from_previous_pct: fallback::comparison_pct(Utc::now().date_naive()),
            daily_traffic,
            top_pages,
            device_breakdown,
        })
    }

    fn mock_data(range: TimeRange) -> AnalyticsDataResponse {
        let today = Utc::now().date_naive();
        let daily_traffic = fallback::daily_traffic(today, range.days());
        let total_visits = daily_traffic.iter().map(|d| d.visits).sum();
        let unique_visitors = daily_traffic.iter().map(|d| d.unique_visitors).sum();
        AnalyticsDataResponse {
            time_range: range.as_str().to_string(),
            total_visits,
            unique_visitors,
            change_from_previous_pct: fallback::comparison_pct(today),
            daily_traffic,
            top_pages: fallback::top_pages(today),
            device_breakdown: fallback::device_breakdown(today),
        }
    }
}

#[async_trait]
impl AnalyticsService for AnalyticsServiceImpl {
    #[instrument(skip(self, request), fields(page = %request.page))]
    async fn record_pageview(&self, request: PageviewRequest) -> PageviewResponse {
        let device_type = request
            .device_type
            .unwrap_or_else(|| device_type_from_user_agent(request.user_agent.as_deref()).to_string());

        let default_location = GeoLocation::default();
        let visit = Visit {
            id: None,
            page: request.page,
            visitor_id: request
                .visitor_id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            timestamp: bson::DateTime::now(),
            referrer: request.referrer,
            user_agent: request.user_agent,
            screen_width: request.screen_width,
            device_type,
            location: GeoLocation {
                country: request.country.unwrap_or(default_location.country),
                region: request.region.unwrap_or(default_location.region),
                city: request.city.unwrap_or(default_location.city),
            },
        };

        if let Err(e) = self.visit_repo.insert(visit).await {
            // Telemetry must never fail a page load.
            warn!("Failed to record pageview: {}", e);
        }
        PageviewResponse { success: true }
    }

    #[instrument(skip(self), fields(range = range.as_str()))]
    async fn data(&self, range: TimeRange) -> Result<AnalyticsDataResponse, ServiceError> {
        match self.gather(range).await {
            Ok(data) if !data.daily_traffic.is_empty() => Ok(data),
            Ok(_) => {
                info!("No visit data in range, serving fallback series");
                Ok(Self::mock_data(range))
            }
            Err(e) => {
                warn!("Analytics aggregation failed, serving fallback series: {}", e);
                Ok(Self::mock_data(range))
            }
        }
    }

    #[instrument(skip(self), fields(range = range.as_str()))]
    async fn geographic(&self, range: TimeRange) -> Result<GeographicResponse, ServiceError> {
        let start = bson::DateTime::from_chrono(range.start_from(Utc::now()));
        let cities = match self.visit_repo.by_city(start).await {
            Ok(cities) if !cities.is_empty() => cities,
            Ok(_) => {
                info!("No geographic data in range, serving fallback list");
                fallback::geographic(Utc::now().date_naive())
            }
            Err(e) => {
                warn!("Geographic aggregation failed, serving fallback list: {}", e);
                fallback::geographic(Utc::now().date_naive())
            }
        };
        Ok(GeographicResponse {
            time_range: range.as_str().to_string(),
            cities,
        })
    }
}
