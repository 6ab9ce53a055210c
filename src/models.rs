use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub whatsapp: String,
    pub tiktok: String,
    pub shopee: String,
    pub category: String,
    pub price: f64,
    pub image: Vec<String>,
    pub description: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    pub id: i32,
    pub store_name: String,
    pub description: String,
    pub tiktok_url: String,
    pub shopee_url: String,
    pub whatsapp_number: String,
    pub whatsapp_message: String,
    pub primary_color: String,
    pub address: Vec<String>,
    pub url_address: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: i32,
    pub name: String,
    pub message: String,
    pub rating: i16,
    pub created_at: DateTime<Utc>,
}
