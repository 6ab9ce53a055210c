use axum::{
    Json, Router,
    extract::State,
};

use crate::{
    dto::config::UpdateConfigRequest,
    error::AppResult,
    models::StoreConfig,
    services::config_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        axum::routing::get(get_config).put(put_config),
    )
}

#[utoipa::path(
    get,
    path = "/api/config",
    responses(
        (status = 200, description = "Store configuration, or an empty object before the first save", body = StoreConfig)
    ),
    tag = "config"
)]
pub async fn get_config(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    let body = match config_service::get_config(&state).await? {
        Some(config) => serde_json::to_value(config).map_err(anyhow::Error::from)?,
        None => serde_json::json!({}),
    };
    Ok(Json(body))
}

#[utoipa::path(
    put,
    path = "/api/config",
    request_body = UpdateConfigRequest,
    responses(
        (status = 200, description = "Saved configuration", body = StoreConfig)
    ),
    tag = "config"
)]
pub async fn put_config(
    State(state): State<AppState>,
    Json(payload): Json<UpdateConfigRequest>,
) -> AppResult<Json<StoreConfig>> {
    let config = config_service::save_config(&state, payload).await?;
    Ok(Json(config))
}
