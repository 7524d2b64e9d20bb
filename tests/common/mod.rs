// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use account_ledger_service::{router, store::create_store};
use std::str::FromStr;

use anyhow::Result;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Helper to create a router over a fresh, empty store
pub fn test_app() -> Router {
    router(create_store())
}

/// Send one request and decode the response body as JSON.
///
/// Empty bodies decode to `Value::Null`.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    cpf: Option<&str>,
    body: Option<Value>,
) -> Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cpf) = cpf {
        builder = builder.header("cpf", cpf);
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body)?))?,
        None => builder.body(Body::empty())?,
    };

    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, value))
}

pub async fn register(app: &Router, cpf: &str, name: &str) -> Result<StatusCode> {
    let (status, _) = send(
        app,
        Method::POST,
        "/account",
        None,
        Some(json!({ "cpf": cpf, "name": name })),
    )
    .await?;
    Ok(status)
}

pub async fn deposit(
    app: &Router,
    cpf: &str,
    description: &str,
    amount: f64,
) -> Result<StatusCode> {
    let (status, _) = send(
        app,
        Method::POST,
        "/deposit",
        Some(cpf),
        Some(json!({ "description": description, "amount": amount })),
    )
    .await?;
    Ok(status)
}

pub async fn withdraw(app: &Router, cpf: &str, amount: f64) -> Result<(StatusCode, Value)> {
    send(
        app,
        Method::POST,
        "/withdraw",
        Some(cpf),
        Some(json!({ "amount": amount })),
    )
    .await
}

/// Read a JSON number back as the exact decimal it was written from
pub fn decimal_of(value: &Value) -> Result<Decimal> {
    anyhow::ensure!(value.is_number(), "not a number: {value}");
    Ok(Decimal::from_str(&value.to_string())?)
}

pub async fn balance(app: &Router, cpf: &str) -> Result<Decimal> {
    let (status, body) = send(app, Method::GET, "/balance", Some(cpf), None).await?;
    assert_eq!(status, StatusCode::OK);
    decimal_of(&body)
}
