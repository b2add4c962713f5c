#![allow(dead_code)]

use anyhow::Result;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use canada_day::config::SalesConfig;
use canada_day::server::{AppState, router};
use serde_json::Value;
use tower::ServiceExt;

pub fn app() -> Router {
    router(AppState::from_config(&SalesConfig { seed: Some(2024) }))
}

pub async fn send(app: Router, request: Request<Body>) -> Result<(StatusCode, Value)> {
    let response = app.oneshot(request).await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok((status, serde_json::from_slice(&bytes)?))
}

pub async fn get(uri: &str) -> Result<(StatusCode, Value)> {
    send(app(), Request::get(uri).body(Body::empty())?).await
}

pub async fn post_json(uri: &str, body: &Value) -> Result<(StatusCode, Value)> {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))?;
    send(app(), request).await
}
