use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

pub const DEVICE_DESKTOP: &str = "desktop";
pub const DEVICE_MOBILE: &str = "mobile";
pub const DEVICE_TABLET: &str = "tablet";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoLocation {
    pub country: String,
    pub region: String,
    pub city: String,
}

impl Default for GeoLocation {
    fn default() -> Self {
        GeoLocation {
            country: "USA".to_string(),
            region: "Michigan".to_string(),
            city: "Detroit".to_string(),
        }
    }
}

/// One recorded pageview. Inserted on every client page load and read back
/// only through aggregation pipelines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Visit {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub page: String,
    pub visitor_id: String,
    pub timestamp: bson::DateTime,
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
    pub screen_width: Option<i32>,
    pub device_type: String,
    pub location: GeoLocation,
}

/// One day of aggregated traffic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyTraffic {
    pub date: String, // YYYY-MM-DD
    pub visits: i64,
    pub unique_visitors: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageCount {
    pub page: String,
    pub visits: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceCount {
    pub device_type: String,
    pub visits: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityCount {
    pub city: String,
    pub visits: i64,
}

/// Derives a coarse device type from a user-agent string when the client did
/// not report one.
pub fn device_type_from_user_agent(user_agent: Option<&str>) -> &'static str {
    match user_agent {
        Some(ua) if ua.contains("iPad") || ua.contains("Tablet") => DEVICE_TABLET,
        Some(ua) if ua.contains("Mobi") || ua.contains("Android") => DEVICE_MOBILE,
        _ => DEVICE_DESKTOP,
    }
}
