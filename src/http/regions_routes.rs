use crate::db::regions;
use crate::http::{ApiError, AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// All reference regions sharing a postal code.
pub async fn regions_by_postal_code_handler(
    State(state): State<AppState>,
    Path(postal_code): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let found = regions::find_regions_by_postal_code(&state.db_pool, &postal_code).await?;
    if found.is_empty() {
        return Err(ApiError::NotFound(format!(
            "no region with postal code {}",
            postal_code
        )));
    }
    Ok((StatusCode::OK, Json(found)))
}
