mod common;

use axum::http::StatusCode;
use serde_json::json;
use std::sync::atomic::Ordering;
use tower::ServiceExt;

use common::{body_json, build_app, request, seed_member, seed_user};

#[tokio::test]
async fn test_pageview_records_visit() {
    let backend = build_app();
    let resp = backend
        .router
        .clone()
        .oneshot(request(
            "POST",
            "/api/analytics/pageview",
            None,
            Some(json!({
                "page": "/community",
                "visitor_id": "11111111-1111-1111-1111-111111111111"
            })),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["success"], true);

    let visits = backend.visit_repo.visits.lock().unwrap();
    assert_eq!(visits.len(), 1);
    assert_eq!(visits[0].page, "/community");
    // Location defaults to Detroit when the client sends none
    assert_eq!(visits[0].location.city, "Detroit");
    assert_eq!(visits[0].location.region, "Michigan");
}

#[tokio::test]
async fn test_pageview_succeeds_even_when_store_fails() {
    let backend = build_app();
    backend.visit_repo.fail.store(true, Ordering::SeqCst);

    let resp = backend
        .router
        .clone()
        .oneshot(request(
            "POST",
            "/api/analytics/pageview",
            None,
            Some(json!({ "page": "/" })),
        ))
        .await
        .unwrap();
    // Fire-and-forget: still a 200
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn test_analytics_data_is_admin_only() {
    let backend = build_app();
    let (_, member_token) = seed_member(&backend, "member@b.com").await;

    let resp = backend
        .router
        .clone()
        .oneshot(request("GET", "/api/analytics/data", Some(&member_token), None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_analytics_data_never_returns_empty_series() {
    let backend = build_app();
    let (_, admin_token) = seed_user(&backend, "admin@b.com", "admin").await;

    // Empty visit collection: fallback series is served
    let resp = backend
        .router
        .clone()
        .oneshot(request(
            "GET",
            "/api/analytics/data?time_range=7d",
            Some(&admin_token),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert!(!body["daily_traffic"].as_array().unwrap().is_empty());
    assert_eq!(body["time_range"], "7d");

    // Failing store: still a 200 with a non-empty series
    backend.visit_repo.fail.store(true, Ordering::SeqCst);
    let resp = backend
        .router
        .clone()
        .oneshot(request(
            "GET",
            "/api/analytics/data?time_range=30d",
            Some(&admin_token),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let series = body["daily_traffic"].as_array().unwrap();
    assert_eq!(series.len(), 30);
}

#[tokio::test]
async fn test_fallback_series_is_deterministic() {
    let backend = build_app();
    let (_, admin_token) = seed_user(&backend, "admin@b.com", "admin").await;
    backend.visit_repo.fail.store(true, Ordering::SeqCst);

    let resp_a = backend
        .router
        .clone()
        .oneshot(request(
            "GET",
            "/api/analytics/data?time_range=7d",
            Some(&admin_token),
            None,
        ))
        .await
        .unwrap();
    let resp_b = backend
        .router
        .clone()
        .oneshot(request(
            "GET",
            "/api/analytics/data?time_range=7d",
            Some(&admin_token),
            None,
        ))
        .await
        .unwrap();
    let body_a = body_json(resp_a).await;
    let body_b = body_json(resp_b).await;
    assert_eq!(body_a["daily_traffic"], body_b["daily_traffic"]);
    assert_eq!(
        body_a["change_from_previous_pct"],
        body_b["change_from_previous_pct"]
    );
}

#[tokio::test]
async fn test_analytics_data_uses_real_visits_when_present() {
    let backend = build_app();
    let (_, admin_token) = seed_user(&backend, "admin@b.com", "admin").await;

    for visitor in ["v1", "v1", "v2"] {
        backend
            .router
            .clone()
            .oneshot(request(
                "POST",
                "/api/analytics/pageview",
                None,
                Some(json!({ "page": "/portfolio", "visitor_id": visitor })),
            ))
            .await
            .unwrap();
    }

    let resp = backend
        .router
        .clone()
        .oneshot(request(
            "GET",
            "/api/analytics/data?time_range=24h",
            Some(&admin_token),
            None,
        ))
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["total_visits"], 3);
    assert_eq!(body["unique_visitors"], 2);
    assert_eq!(body["top_pages"][0]["page"], "/portfolio");
}

#[tokio::test]
async fn test_geographic_falls_back_to_michigan_cities() {
    let backend = build_app();
    let (_, admin_token) = seed_user(&backend, "admin@b.com", "admin").await;
    backend.visit_repo.fail.store(true, Ordering::SeqCst);

    let resp = backend
        .router
        .clone()
        .oneshot(request(
            "GET",
            "/api/analytics/geographic",
            Some(&admin_token),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let cities = body["cities"].as_array().unwrap();
    assert!(!cities.is_empty());
    let names: Vec<&str> = cities.iter().map(|c| c["city"].as_str().unwrap()).collect();
    assert!(names.contains(&"Detroit"));
}
