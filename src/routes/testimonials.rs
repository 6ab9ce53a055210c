use axum::{
    Json, Router,
    extract::{Path, State},
};

use crate::{
    error::AppResult,
    models::Testimonial,
    routes::{Ack, parse_id},
    services::testimonial_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", axum::routing::get(list_testimonials))
        .route("/{id}", axum::routing::delete(delete_testimonial))
}

#[utoipa::path(
    get,
    path = "/api/testimonials",
    responses(
        (status = 200, description = "All testimonials, newest first", body = Vec<Testimonial>)
    ),
    tag = "testimonials"
)]
pub async fn list_testimonials(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Testimonial>>> {
    let items = testimonial_service::list_testimonials(&state).await?;
    Ok(Json(items))
}

#[utoipa::path(
    delete,
    path = "/api/testimonials/{id}",
    params(
        ("id" = i32, Path, description = "Testimonial ID")
    ),
    responses(
        (status = 200, description = "Deleted testimonial", body = Ack),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Testimonial not found"),
    ),
    tag = "testimonials"
)]
pub async fn delete_testimonial(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Ack>> {
    let id = parse_id(&id)?;
    testimonial_service::delete_testimonial(&state, id).await?;
    Ok(Json(Ack::ok()))
}
