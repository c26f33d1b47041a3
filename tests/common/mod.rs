#![allow(dead_code)]

use axum::body::Body;
use axum::Router;
use http_body_util::BodyExt;
use axum::http::{Request, StatusCode};
use premium_server::db::{create_memory_pool, DbPool, SqliteQuoteStore};
use premium_server::http::{create_router, AppState};
use premium_server::services::{QuoteService, ReferenceDataStatus};
use std::sync::Arc;
use std::time::SystemTime;
use tower::ServiceExt;

pub async fn test_app(reference_data: ReferenceDataStatus) -> (Router, DbPool) {
    let pool = create_memory_pool().await.expect("in-memory database");
    let quotes = Arc::new(QuoteService::new(Arc::new(SqliteQuoteStore::new(pool.clone()))));
    let state = AppState {
        quotes,
        db_pool: pool.clone(),
        reference_data,
        start_time: SystemTime::now(),
    };
    (create_router(state), pool)
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).expect("request"))
        .await
        .expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, json)
}

pub fn assert_close(actual: &serde_json::Value, expected: f64) {
    let actual = actual.as_f64().expect("number");
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
