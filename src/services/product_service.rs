use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use serde_json::Value;

use crate::{
    audit::log_audit,
    dto::products::{CreateProductRequest, ProductList, UpdateProductRequest},
    entity::{
        StringList,
        products::{ActiveModel, Column, Entity as Products, Model as ProductModel},
    },
    error::{AppError, AppResult},
    models::Product,
    state::AppState,
    util::ensure_url_scheme,
};

pub const MAX_PRODUCT_IMAGES: usize = 5;

pub async fn list_products(state: &AppState) -> AppResult<ProductList> {
    let items = Products::find()
        .order_by_desc(Column::CreatedAt)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(product_from_entity)
        .collect();

    Ok(ProductList { items })
}

pub async fn get_product(state: &AppState, id: i32) -> AppResult<Product> {
    let result = Products::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(product_from_entity);
    match result {
        Some(p) => Ok(p),
        None => Err(AppError::not_found("Product not found")),
    }
}

pub async fn create_product(
    state: &AppState,
    payload: CreateProductRequest,
) -> AppResult<Product> {
    let name = require_text(payload.name, "name")?;
    let category = require_text(payload.category, "category")?;
    let description = require_text(payload.description, "description")?;
    let price = coerce_price(payload.price.as_ref().ok_or_else(|| {
        AppError::validation("Field price is required")
    })?)?;
    let image = validate_images(payload.image.as_ref().ok_or_else(|| {
        AppError::validation("Field image is required")
    })?)?;

    let active = ActiveModel {
        id: NotSet,
        name: Set(name),
        whatsapp: Set(payload.whatsapp.unwrap_or_default()),
        tiktok: Set(ensure_url_scheme(payload.tiktok.as_deref().unwrap_or(""))),
        shopee: Set(ensure_url_scheme(payload.shopee.as_deref().unwrap_or(""))),
        category: Set(category),
        price: Set(price),
        image: Set(StringList(image)),
        description: Set(description),
        // New products always start visible, whatever the caller sent.
        active: Set(true),
        created_at: NotSet,
    };
    let product = active.insert(&state.orm).await?;

    if let Err(err) = log_audit(
        &state.pool,
        "product_create",
        Some("products"),
        Some(serde_json::json!({ "product_id": product.id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(product_from_entity(product))
}

pub async fn update_product(
    state: &AppState,
    id: i32,
    payload: UpdateProductRequest,
) -> AppResult<Product> {
    let existing = Products::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(p) => p,
        None => return Err(AppError::not_found("Product not found")),
    };

    // Only fields present in the body are written; an explicit empty string
    // clears, omission preserves.
    let mut active: ActiveModel = existing.clone().into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(whatsapp) = payload.whatsapp {
        active.whatsapp = Set(whatsapp);
    }
    if let Some(tiktok) = payload.tiktok {
        active.tiktok = Set(ensure_url_scheme(&tiktok));
    }
    if let Some(shopee) = payload.shopee {
        active.shopee = Set(ensure_url_scheme(&shopee));
    }
    if let Some(category) = payload.category {
        active.category = Set(category);
    }
    if let Some(price) = payload.price.as_ref() {
        active.price = Set(coerce_price(price)?);
    }
    if let Some(image) = payload.image.as_ref() {
        active.image = Set(StringList(validate_images(image)?));
    }
    if let Some(description) = payload.description {
        active.description = Set(description);
    }
    if let Some(visible) = payload.active {
        active.active = Set(visible);
    }

    // A body with no recognized fields leaves the row as it is.
    let product = if active.is_changed() {
        active.update(&state.orm).await?
    } else {
        existing
    };

    if let Err(err) = log_audit(
        &state.pool,
        "product_update",
        Some("products"),
        Some(serde_json::json!({ "product_id": product.id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(product_from_entity(product))
}

pub async fn delete_product(state: &AppState, id: i32) -> AppResult<()> {
    let result = Products::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::not_found("Product not found"));
    }

    if let Err(err) = log_audit(
        &state.pool,
        "product_delete",
        Some("products"),
        Some(serde_json::json!({ "product_id": id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(())
}

/// Accept a JSON number or a numeric string, reject anything that does not
/// coerce to a finite non-negative float.
pub fn coerce_price(value: &Value) -> AppResult<f64> {
    let price = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .ok_or_else(|| AppError::validation("Field price must be a number or a numeric string"))?;

    if !price.is_finite() || price < 0.0 {
        return Err(AppError::validation("Field price must be a non-negative number"));
    }
    Ok(price)
}

/// Structural check for the image payload, each failure with its own message:
/// must be a list, non-empty, at most five entries, strings only. Entries come
/// back scheme-normalized.
pub fn validate_images(value: &Value) -> AppResult<Vec<String>> {
    let entries = value
        .as_array()
        .ok_or_else(|| AppError::validation("Field image must be a list of URLs"))?;

    if entries.is_empty() {
        return Err(AppError::validation(
            "Field image must contain at least one entry",
        ));
    }
    if entries.len() > MAX_PRODUCT_IMAGES {
        return Err(AppError::validation(
            "Field image can hold at most 5 entries",
        ));
    }

    entries
        .iter()
        .map(|entry| {
            entry
                .as_str()
                .map(ensure_url_scheme)
                .ok_or_else(|| AppError::validation("Field image entries must be strings"))
        })
        .collect()
}

fn require_text(value: Option<String>, field: &str) -> AppResult<String> {
    value
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::validation(format!("Field {field} is required")))
}

fn product_from_entity(model: ProductModel) -> Product {
    Product {
        id: model.id,
        name: model.name,
        whatsapp: model.whatsapp,
        // Re-normalize on read so rows written before normalization still
        // shape to absolute URLs.
        tiktok: ensure_url_scheme(&model.tiktok),
        shopee: ensure_url_scheme(&model.shopee),
        category: model.category,
        price: model.price,
        image: model.image.into_inner(),
        description: model.description,
        active: model.active,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
