use sea_orm::entity::prelude::*;

use super::StringList;

/// Singleton row; the write path always targets `SINGLETON_ID`.
pub const SINGLETON_ID: i32 = 1;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "store_config")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub store_name: String,
    pub description: String,
    pub tiktok_url: String,
    pub shopee_url: String,
    pub whatsapp_number: String,
    pub whatsapp_message: String,
    pub primary_color: String,
    pub address: StringList,
    pub url_address: StringList,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
