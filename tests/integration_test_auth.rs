mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::TestApp;
use serde_json::{json, Value};
use tower::ServiceExt; // for `oneshot`

async fn body_json(response: axum::http::Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_setup_succeeds_exactly_once() {
    let app = TestApp::new().await;

    let payload = json!({
        "name": "First Admin",
        "email": "first@example.com",
        "password": "secret-pass"
    });

    let response = app.router.clone().oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/admin/setup")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap(),
    ).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["role"], "superadmin");
    assert!(body["token"].as_str().unwrap().len() > 0);

    // Any later call must be rejected, whatever the payload.
    let response = app.router.clone().oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/admin/setup")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({
                "name": "Imposter",
                "email": "other@example.com",
                "password": "whatever"
            }).to_string()))
            .unwrap(),
    ).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Admin setup has already been completed");
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new().await;
    app.setup_first_admin().await;

    let wrong_password = app.router.clone().oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/admin/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({
                "email": "root@example.com",
                "password": "not-the-password"
            }).to_string()))
            .unwrap(),
    ).await.unwrap();

    let unknown_email = app.router.clone().oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/admin/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({
                "email": "nobody@example.com",
                "password": "root-password"
            }).to_string()))
            .unwrap(),
    ).await.unwrap();

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

    // Identical bodies: no account enumeration through the error message.
    let body_a = body_json(wrong_password).await;
    let body_b = body_json(unknown_email).await;
    assert_eq!(body_a, body_b);
    assert_eq!(body_a["message"], "Invalid email or password");
}

#[tokio::test]
async fn test_login_records_audit_trail() {
    let app = TestApp::new().await;
    app.setup_first_admin().await;

    for ip in ["203.0.113.7", "203.0.113.8"] {
        let response = app.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/admin/login")
                .header(header::CONTENT_TYPE, "application/json")
                .header("x-forwarded-for", ip)
                .body(Body::from(json!({
                    "email": "root@example.com",
                    "password": "root-password"
                }).to_string()))
                .unwrap(),
        ).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    // Fresh login to fetch the history; this adds a third entry.
    let response = app.router.clone().oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/admin/login")
            .header(header::CONTENT_TYPE, "application/json")
            .header("x-forwarded-for", "203.0.113.9")
            .body(Body::from(json!({
                "email": "root@example.com",
                "password": "root-password"
            }).to_string()))
            .unwrap(),
    ).await.unwrap();
    let token = body_json(response).await["token"].as_str().unwrap().to_string();

    let response = app.router.clone().oneshot(
        Request::builder()
            .uri("/api/admin/login-history")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap(),
    ).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["lastLoginIp"], "203.0.113.9");
    let history = body["loginHistory"].as_array().unwrap();
    assert_eq!(history.len(), 3);
    assert_eq!(history[0]["ip"], "203.0.113.7");
    assert_eq!(history[2]["ip"], "203.0.113.9");
    assert!(history[2]["timestamp"].is_string());
}

#[tokio::test]
async fn test_login_without_forwarded_header_records_unknown() {
    let app = TestApp::new().await;
    app.setup_first_admin().await;

    let response = app.router.clone().oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/admin/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({
                "email": "root@example.com",
                "password": "root-password"
            }).to_string()))
            .unwrap(),
    ).await.unwrap();
    let token = body_json(response).await["token"].as_str().unwrap().to_string();

    let response = app.router.clone().oneshot(
        Request::builder()
            .uri("/api/admin/login-history")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap(),
    ).await.unwrap();

    let body = body_json(response).await;
    // No forwarded-for header and no socket peer under oneshot.
    assert_eq!(body["lastLoginIp"], "Unknown");
}

#[tokio::test]
async fn test_profile_omits_password_hash() {
    let app = TestApp::new().await;
    let token = app.setup_first_admin().await;

    let response = app.router.clone().oneshot(
        Request::builder()
            .uri("/api/admin/profile")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap(),
    ).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["email"], "root@example.com");
    assert_eq!(body["role"], "superadmin");
    assert!(body.get("passwordHash").is_none());
    assert!(body.get("password_hash").is_none());
    assert!(body["loginHistory"].is_array());
}

#[tokio::test]
async fn test_register_requires_admin_token() {
    let app = TestApp::new().await;
    app.setup_first_admin().await;

    let payload = json!({
        "name": "New Admin",
        "email": "new@example.com",
        "password": "new-password"
    });

    let response = app.router.clone().oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/admin/register")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap(),
    ).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_register_defaults_role_and_rejects_duplicates() {
    let app = TestApp::new().await;
    let token = app.setup_first_admin().await;

    let payload = json!({
        "name": "New Admin",
        "email": "new@example.com",
        "password": "new-password"
    });

    let response = app.router.clone().oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/admin/register")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap(),
    ).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["role"], "admin");

    // The returned token belongs to the created identity.
    let new_token = body["token"].as_str().unwrap().to_string();
    let response = app.router.clone().oneshot(
        Request::builder()
            .uri("/api/admin/profile")
            .header(header::AUTHORIZATION, format!("Bearer {}", new_token))
            .body(Body::empty())
            .unwrap(),
    ).await.unwrap();
    assert_eq!(body_json(response).await["email"], "new@example.com");

    let response = app.router.clone().oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/admin/register")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({
                "name": "Duplicate",
                "email": "new@example.com",
                "password": "other-password"
            }).to_string()))
            .unwrap(),
    ).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "Admin already exists");
}

#[tokio::test]
async fn test_register_rejects_unknown_role() {
    let app = TestApp::new().await;
    let token = app.setup_first_admin().await;

    let response = app.router.clone().oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/admin/register")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({
                "name": "Weird",
                "email": "weird@example.com",
                "password": "password",
                "role": "root"
            }).to_string()))
            .unwrap(),
    ).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_token_is_rejected() {
    let app = TestApp::new().await;
    app.setup_first_admin().await;

    let response = app.router.clone().oneshot(
        Request::builder()
            .uri("/api/admin/profile")
            .header(header::AUTHORIZATION, "Bearer not-a-real-token")
            .body(Body::empty())
            .unwrap(),
    ).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app.router.clone().oneshot(
        Request::builder()
            .uri("/api/admin/profile")
            .header(header::AUTHORIZATION, "Basic abc123")
            .body(Body::empty())
            .unwrap(),
    ).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
