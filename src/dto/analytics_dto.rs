use crate::model::visit::{CityCount, DailyTraffic, DeviceCount, PageCount};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Reporting windows accepted by the analytics endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRange {
    Day,
    Week,
    Month,
    Quarter,
}

impl TimeRange {
    /// Defaults to the 7-day window on unknown or missing input.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("24h") => TimeRange::Day,
            Some("30d") => TimeRange::Month,
            Some("90d") => TimeRange::Quarter,
            _ => TimeRange::Week,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimeRange::Day => "24h",
            TimeRange::Week => "7d",
            TimeRange::Month => "30d",
            TimeRange::Quarter => "90d",
        }
    }

    pub fn days(self) -> i64 {
        match self {
            TimeRange::Day => 1,
            TimeRange::Week => 7,
            TimeRange::Month => 30,
            TimeRange::Quarter => 90,
        }
    }

    pub fn start_from(self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - Duration::days(self.days())
    }
}

#[derive(Debug, Deserialize)]
pub struct AnalyticsQuery {
    pub time_range: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PageviewRequest {
    pub page: String,
    pub visitor_id: Option<String>,
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
    pub screen_width: Option<i32>,
    pub device_type: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PageviewResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct AnalyticsDataResponse {
    pub time_range: String,
    pub total_visits: i64,
    pub unique_visitors: i64,
    /// Percentage vs. the previous period. Not derived from stored data.
    pub change_from_previous_pct: f64,
    pub daily_traffic: Vec<DailyTraffic>,
    pub top_pages: Vec<PageCount>,
    pub device_breakdown: Vec<DeviceCount>,
}

#[derive(Debug, Serialize)]
pub struct GeographicResponse {
    pub time_range: String,
    pub cities: Vec<CityCount>,
}
