use serde::Deserialize;
use utoipa::ToSchema;

/// Absent or empty scalar fields fall back to their defaults on write
/// (`primaryColor` to `#3b82f6`, everything else to `""`).
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateConfigRequest {
    pub store_name: Option<String>,
    pub description: Option<String>,
    pub tiktok_url: Option<String>,
    pub shopee_url: Option<String>,
    pub whatsapp_number: Option<String>,
    pub whatsapp_message: Option<String>,
    pub primary_color: Option<String>,
    pub address: Option<Vec<String>>,
    pub url_address: Option<Vec<String>>,
}
