//! Drive a router in-process.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Send one request and decode the JSON response body.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: impl Into<String>,
) -> anyhow::Result<(StatusCode, Value)> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.into()))?;

    let response = app.oneshot(request).await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();
    let value = serde_json::from_slice(&bytes)?;
    Ok((status, value))
}

/// POST a JSON value.
#[allow(dead_code)]
pub async fn post_json(app: Router, uri: &str, body: &Value) -> anyhow::Result<(StatusCode, Value)> {
    send(app, Method::POST, uri, body.to_string()).await
}
