mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

use store_ratings_api::auth::Role;

// The auth gate runs before any handler touches the database, so these
// assertions hold with or without a reachable Postgres.

#[tokio::test]
async fn missing_token_is_unauthorized() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/admin/dashboard", server.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "UNAUTHORIZED");
    Ok(())
}

#[tokio::test]
async fn malformed_token_is_unauthorized() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/admin/dashboard", server.base_url))
        .header("Authorization", "Bearer not.a.jwt")
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn user_token_on_admin_endpoint_is_forbidden() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let token = common::token_for(1, Role::User);

    let res = client
        .get(format!("{}/api/admin/dashboard", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "FORBIDDEN");
    // No data leaks alongside the refusal
    assert!(body.get("data").is_none());
    Ok(())
}

#[tokio::test]
async fn admin_token_on_owner_dashboard_is_forbidden() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let token = common::token_for(1, Role::Admin);

    let res = client
        .get(format!("{}/api/store/dashboard", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    Ok(())
}

#[tokio::test]
async fn signup_validation_reports_every_violation() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let payload = json!({
        "name": "too short",
        "email": "not-an-email",
        "password": "weak",
    });

    let res = client
        .post(format!("{}/api/auth/signup", server.base_url))
        .json(&payload)
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let violations = body["violations"].as_array().cloned().unwrap_or_default();
    let fields: Vec<&str> = violations.iter().filter_map(|v| v["field"].as_str()).collect();
    assert!(fields.contains(&"name"), "missing name violation: {}", body);
    assert!(fields.contains(&"email"), "missing email violation: {}", body);
    assert!(fields.contains(&"password"), "missing password violation: {}", body);
    Ok(())
}

#[tokio::test]
async fn login_requires_a_well_formed_email() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/auth/login", server.base_url))
        .json(&json!({ "email": "nope", "password": "whatever" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}
