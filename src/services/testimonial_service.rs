use chrono::Utc;
use sea_orm::{EntityTrait, QueryOrder};

use crate::{
    audit::log_audit,
    entity::testimonials::{Column, Entity as Testimonials, Model as TestimonialModel},
    error::{AppError, AppResult},
    models::Testimonial,
    state::AppState,
};

pub async fn list_testimonials(state: &AppState) -> AppResult<Vec<Testimonial>> {
    let items = Testimonials::find()
        .order_by_desc(Column::CreatedAt)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(testimonial_from_entity)
        .collect();

    Ok(items)
}

pub async fn delete_testimonial(state: &AppState, id: i32) -> AppResult<()> {
    let result = Testimonials::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::not_found("Testimonial not found"));
    }

    if let Err(err) = log_audit(
        &state.pool,
        "testimonial_delete",
        Some("testimonials"),
        Some(serde_json::json!({ "testimonial_id": id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(())
}

fn testimonial_from_entity(model: TestimonialModel) -> Testimonial {
    Testimonial {
        id: model.id,
        name: model.name,
        message: model.message,
        rating: model.rating,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
