use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

pub mod products;
pub mod store_config;
pub mod testimonials;

pub use products::Entity as Products;
pub use store_config::Entity as StoreConfig;
pub use testimonials::Entity as Testimonials;

/// JSONB-backed ordered list of strings (product images, config addresses).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct StringList(pub Vec<String>);

impl StringList {
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for StringList {
    fn from(items: Vec<String>) -> Self {
        StringList(items)
    }
}
