use axum::Router;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    state::AppState,
};

pub mod config;
pub mod doc;
pub mod health;
pub mod products;
pub mod testimonials;

/// Body of a successful delete.
#[derive(Debug, Serialize, ToSchema)]
pub struct Ack {
    pub ok: bool,
}

impl Ack {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

/// Path ids are taken as raw strings so a non-integer id reports through the
/// normal error shape instead of a framework rejection.
pub fn parse_id(raw: &str) -> AppResult<i32> {
    raw.parse::<i32>()
        .map_err(|_| AppError::validation(format!("Invalid id: {raw}")))
}

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/products", products::router())
        .nest("/config", config::router())
        .nest("/testimonials", testimonials::router())
}
