mod common;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use common::{body_json, build_app, request, seed_member};

#[tokio::test]
async fn test_signup_creates_member_and_token_works() {
    let backend = build_app();

    let req = request(
        "POST",
        "/api/auth/signup",
        None,
        Some(json!({
            "email": "a@b.com",
            "password": "longenough",
            "name": "A",
            "location": "Detroit"
        })),
    );
    let resp = backend.router.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["user"]["role"], "member");
    assert_eq!(body["user"]["email"], "a@b.com");
    let token = body["token"].as_str().expect("token missing");

    // The issued token must authenticate against /users/me
    let req = request("GET", "/api/users/me", Some(token), None);
    let resp = backend.router.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let me = body_json(resp).await;
    assert_eq!(me["email"], "a@b.com");
}

#[tokio::test]
async fn test_signup_rejects_unlisted_location() {
    let backend = build_app();
    let req = request(
        "POST",
        "/api/auth/signup",
        None,
        Some(json!({
            "email": "a@b.com",
            "password": "longenough",
            "name": "A",
            "location": "Chicago"
        })),
    );
    let resp = backend.router.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_signup_accepts_other_location() {
    let backend = build_app();
    let req = request(
        "POST",
        "/api/auth/signup",
        None,
        Some(json!({
            "email": "a@b.com",
            "password": "longenough",
            "name": "A",
            "location": "Other"
        })),
    );
    let resp = backend.router.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_signup_rejects_duplicate_email() {
    let backend = build_app();
    let payload = json!({
        "email": "dup@b.com",
        "password": "longenough",
        "name": "A",
        "location": "Detroit"
    });

    let resp = backend
        .router
        .clone()
        .oneshot(request("POST", "/api/auth/signup", None, Some(payload.clone())))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = backend
        .router
        .clone()
        .oneshot(request("POST", "/api/auth/signup", None, Some(payload)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_signup_rejects_short_password() {
    let backend = build_app();
    let req = request(
        "POST",
        "/api/auth/signup",
        None,
        Some(json!({
            "email": "a@b.com",
            "password": "short",
            "name": "A",
            "location": "Detroit"
        })),
    );
    let resp = backend.router.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_mismatches_are_indistinguishable() {
    let backend = build_app();
    seed_member(&backend, "known@b.com").await;

    let wrong_password = request(
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": "known@b.com", "password": "wrongpassword" })),
    );
    let unknown_email = request(
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": "nobody@b.com", "password": "longenough" })),
    );

    let resp_a = backend.router.clone().oneshot(wrong_password).await.unwrap();
    let resp_b = backend.router.clone().oneshot(unknown_email).await.unwrap();
    assert_eq!(resp_a.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(resp_b.status(), StatusCode::UNAUTHORIZED);

    // Identical bodies: no user-enumeration signal
    let body_a = body_json(resp_a).await;
    let body_b = body_json(resp_b).await;
    assert_eq!(body_a, body_b);
}

#[tokio::test]
async fn test_login_succeeds_with_correct_password() {
    let backend = build_app();
    seed_member(&backend, "known@b.com").await;

    let req = request(
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": "known@b.com", "password": "longenough" })),
    );
    let resp = backend.router.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["user"]["email"], "known@b.com");
    assert!(body["token"].is_string());
}

#[tokio::test]
async fn test_logout_requires_token() {
    let backend = build_app();
    let resp = backend
        .router
        .clone()
        .oneshot(request("POST", "/api/auth/logout", None, None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let (_, token) = seed_member(&backend, "known@b.com").await;
    let resp = backend
        .router
        .clone()
        .oneshot(request("POST", "/api/auth/logout", Some(&token), None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_profile_update_rejects_bad_location() {
    let backend = build_app();
    let (_, token) = seed_member(&backend, "known@b.com").await;

    let resp = backend
        .router
        .clone()
        .oneshot(request(
            "PUT",
            "/api/users/me",
            Some(&token),
            Some(json!({ "location": "Toledo" })),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = backend
        .router
        .clone()
        .oneshot(request(
            "PUT",
            "/api/users/me",
            Some(&token),
            Some(json!({ "location": "Ann Arbor", "bio": "hi" })),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["location"], "Ann Arbor");
    assert_eq!(body["bio"], "hi");
}
