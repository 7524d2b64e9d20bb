mod common;

use anyhow::Result;
use axum::http::{Method, StatusCode};
use common::{deposit, register, send, test_app};
use serde_json::json;

#[tokio::test]
async fn test_register_returns_empty_created() -> Result<()> {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/account",
        None,
        Some(json!({ "cpf": "111", "name": "Alice" })),
    )
    .await?;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body.is_null());

    Ok(())
}

#[tokio::test]
async fn test_duplicate_register_rejected() -> Result<()> {
    let app = test_app();

    assert_eq!(register(&app, "222", "Bob").await?, StatusCode::CREATED);
    let (status, body) = send(
        &app,
        Method::POST,
        "/account",
        None,
        Some(json!({ "cpf": "222", "name": "Bobby" })),
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "account already exists" }));

    // The first registration is untouched
    let (_, account) = send(&app, Method::GET, "/account", Some("222"), None).await?;
    assert_eq!(account["name"], "Bob");

    Ok(())
}

#[tokio::test]
async fn test_get_account_includes_statement() -> Result<()> {
    let app = test_app();
    register(&app, "111", "Alice").await?;
    deposit(&app, "111", "salary", 100.0).await?;

    let (status, account) = send(&app, Method::GET, "/account", Some("111"), None).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(account["cpf"], "111");
    assert_eq!(account["name"], "Alice");
    assert!(account["id"].is_string());
    assert_eq!(account["statement"].as_array().map(Vec::len), Some(1));
    assert_eq!(account["statement"][0]["type"], "credit");
    assert_eq!(account["statement"][0]["description"], "salary");

    Ok(())
}

#[tokio::test]
async fn test_update_name() -> Result<()> {
    let app = test_app();
    register(&app, "111", "Alice").await?;
    let (_, before) = send(&app, Method::GET, "/account", Some("111"), None).await?;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/account",
        Some("111"),
        Some(json!({ "name": "Alice Smith" })),
    )
    .await?;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body.is_null());
    let (_, after) = send(&app, Method::GET, "/account", Some("111"), None).await?;
    assert_eq!(after["name"], "Alice Smith");
    assert_eq!(after["id"], before["id"]);

    Ok(())
}

#[tokio::test]
async fn test_delete_removes_only_addressed_account() -> Result<()> {
    let app = test_app();
    register(&app, "111", "Alice").await?;
    register(&app, "222", "Bob").await?;
    register(&app, "333", "Carol").await?;

    let (status, remaining) = send(&app, Method::DELETE, "/account", Some("222"), None).await?;

    assert_eq!(status, StatusCode::OK);
    let cpfs: Vec<&str> = remaining
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|account| account["cpf"].as_str())
        .collect();
    assert_eq!(cpfs, vec!["111", "333"]);

    let (status, body) = send(&app, Method::GET, "/account", Some("222"), None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "account not found");

    // The cpf can be registered again once freed
    assert_eq!(register(&app, "222", "Bob").await?, StatusCode::CREATED);

    Ok(())
}

#[tokio::test]
async fn test_malformed_register_body_rejected() -> Result<()> {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/account",
        None,
        Some(json!({ "name": "No Cpf" })),
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (_, health) = send(&app, Method::GET, "/health", None, None).await?;
    assert_eq!(health["accounts"], 0);

    Ok(())
}

#[tokio::test]
async fn test_health_counts_accounts() -> Result<()> {
    let app = test_app();
    register(&app, "111", "Alice").await?;
    register(&app, "222", "Bob").await?;

    let (status, body) = send(&app, Method::GET, "/health", None, None).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["accounts"], 2);

    Ok(())
}
