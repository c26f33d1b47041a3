use crate::http::{ApiError, AppState, QuoteInput};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

pub async fn calculate_handler(
    State(state): State<AppState>,
    body: Result<Json<QuoteInput>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(input) = body?;
    let quote = state.quotes.create(input).await?;
    Ok((StatusCode::OK, Json(quote)))
}

pub async fn list_quotes_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let quotes = state.quotes.list().await?;
    Ok((StatusCode::OK, Json(quotes)))
}

pub async fn get_quote_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = path?;
    let quote = state.quotes.get(id).await?;
    Ok((StatusCode::OK, Json(quote)))
}

pub async fn update_quote_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<QuoteInput>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = path?;
    let Json(input) = body?;
    let quote = state.quotes.update(id, input).await?;
    Ok((StatusCode::OK, Json(quote)))
}

pub async fn delete_quote_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = path?;
    if state.quotes.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::quote_not_found(id))
    }
}
