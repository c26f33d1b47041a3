use crate::db::{quotes, regions};
use crate::http::quotes_routes::{
    calculate_handler, delete_quote_handler, get_quote_handler, list_quotes_handler,
    update_quote_handler,
};
use crate::http::regions_routes::regions_by_postal_code_handler;
use crate::http::{ApiError, AppState, HealthResponse};
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use std::time::SystemTime;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    let insurance_routes = Router::new()
        .route("/", get(list_quotes_handler))
        .route("/calculate", post(calculate_handler))
        .route("/regions/:postal_code", get(regions_by_postal_code_handler))
        .route(
            "/:id",
            get(get_quote_handler)
                .put(update_quote_handler)
                .delete(delete_quote_handler),
        );

    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .nest("/insurance", insurance_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let uptime = SystemTime::now()
        .duration_since(state.start_time)
        .map(|d| d.as_secs())
        .unwrap_or_default();

    let ok = state.reference_data.is_healthy();
    let response = HealthResponse {
        ok,
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: uptime,
        timestamp: Utc::now(),
        reference_data: state.reference_data.clone(),
    };

    let status = if ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(response))
}

async fn metrics_handler(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let quote_count = quotes::count_quotes(&state.db_pool).await?;
    let region_count = regions::count_regions(&state.db_pool).await?;
    let reference_up = u8::from(state.reference_data.is_healthy());

    let metrics = format!(
        "# HELP premium_server_up Server is running\n\
         # TYPE premium_server_up gauge\n\
         premium_server_up 1\n\
         # HELP premium_reference_data_ok Region reference data import did not fail\n\
         # TYPE premium_reference_data_ok gauge\n\
         premium_reference_data_ok {reference_up}\n\
         # HELP premium_quotes Stored quotes\n\
         # TYPE premium_quotes gauge\n\
         premium_quotes {quote_count}\n\
         # HELP premium_regions Stored reference regions\n\
         # TYPE premium_regions gauge\n\
         premium_regions {region_count}\n"
    );

    Ok((StatusCode::OK, metrics))
}
