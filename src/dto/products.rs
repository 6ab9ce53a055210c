use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::models::Product;

/// Every field is optional at the serde layer; the service checks the
/// required ones so a missing field reports as a `VALIDATION` error with a
/// message naming it, not as a deserialization rejection.
///
/// `price` and `image` come in as raw JSON: `price` may be a number or a
/// numeric string, `image` must be a list of 1 to 5 URL strings.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub whatsapp: Option<String>,
    pub tiktok: Option<String>,
    pub shopee: Option<String>,
    pub category: Option<String>,
    #[schema(value_type = Object)]
    pub price: Option<Value>,
    #[schema(value_type = Object)]
    pub image: Option<Value>,
    pub description: Option<String>,
}

/// Partial update: a field left out of the body keeps its stored value, a
/// field present with an empty string clears it.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub whatsapp: Option<String>,
    pub tiktok: Option<String>,
    pub shopee: Option<String>,
    pub category: Option<String>,
    #[schema(value_type = Object)]
    pub price: Option<Value>,
    #[schema(value_type = Object)]
    pub image: Option<Value>,
    pub description: Option<String>,
    pub active: Option<bool>,
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductList {
    #[schema(value_type = Vec<Product>)]
    pub items: Vec<Product>,
}
