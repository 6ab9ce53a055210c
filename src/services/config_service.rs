use sea_orm::sea_query::OnConflict;
use sea_orm::{EntityTrait, Set};

use crate::{
    audit::log_audit,
    dto::config::UpdateConfigRequest,
    entity::{
        StringList,
        store_config::{ActiveModel, Column, Entity as StoreConfigs, Model as ConfigModel, SINGLETON_ID},
    },
    error::AppResult,
    models::StoreConfig,
    state::AppState,
};

pub const DEFAULT_PRIMARY_COLOR: &str = "#3b82f6";

/// `None` when no config has ever been saved; the route renders that as `{}`.
pub async fn get_config(state: &AppState) -> AppResult<Option<StoreConfig>> {
    let row = StoreConfigs::find().one(&state.orm).await?;
    Ok(row.map(config_from_entity))
}

pub async fn save_config(
    state: &AppState,
    payload: UpdateConfigRequest,
) -> AppResult<StoreConfig> {
    let (address, url_address) = aligned_addresses(
        payload.address.unwrap_or_default(),
        payload.url_address.unwrap_or_default(),
    );

    let active = ActiveModel {
        id: Set(SINGLETON_ID),
        store_name: Set(text_or(payload.store_name, "")),
        description: Set(text_or(payload.description, "")),
        tiktok_url: Set(text_or(payload.tiktok_url, "")),
        shopee_url: Set(text_or(payload.shopee_url, "")),
        whatsapp_number: Set(text_or(payload.whatsapp_number, "")),
        whatsapp_message: Set(text_or(payload.whatsapp_message, "")),
        primary_color: Set(text_or(payload.primary_color, DEFAULT_PRIMARY_COLOR)),
        address: Set(StringList(address)),
        url_address: Set(StringList(url_address)),
    };

    // Upsert keyed on the fixed singleton id: concurrent first writes
    // serialize on the row key instead of racing a find-then-create.
    let model = StoreConfigs::insert(active)
        .on_conflict(
            OnConflict::column(Column::Id)
                .update_columns([
                    Column::StoreName,
                    Column::Description,
                    Column::TiktokUrl,
                    Column::ShopeeUrl,
                    Column::WhatsappNumber,
                    Column::WhatsappMessage,
                    Column::PrimaryColor,
                    Column::Address,
                    Column::UrlAddress,
                ])
                .to_owned(),
        )
        .exec_with_returning(&state.orm)
        .await?;

    if let Err(err) = log_audit(&state.pool, "config_save", Some("store_config"), None).await {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(config_from_entity(model))
}

/// Pad the shorter list with empty strings so `address[i]` always has a
/// matching `urlAddress[i]`.
pub fn aligned_addresses(
    address: Vec<String>,
    url_address: Vec<String>,
) -> (Vec<String>, Vec<String>) {
    let max_len = address.len().max(url_address.len());
    let pad = |mut list: Vec<String>| {
        list.resize(max_len, String::new());
        list
    };
    (pad(address), pad(url_address))
}

fn text_or(value: Option<String>, default: &str) -> String {
    match value {
        Some(s) if !s.is_empty() => s,
        _ => default.to_string(),
    }
}

fn config_from_entity(model: ConfigModel) -> StoreConfig {
    StoreConfig {
        id: model.id,
        store_name: model.store_name,
        description: model.description,
        tiktok_url: model.tiktok_url,
        shopee_url: model.shopee_url,
        whatsapp_number: model.whatsapp_number,
        whatsapp_message: model.whatsapp_message,
        primary_color: model.primary_color,
        address: model.address.into_inner(),
        url_address: model.url_address.into_inner(),
    }
}
