use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        config::UpdateConfigRequest,
        products::{CreateProductRequest, ProductList, UpdateProductRequest},
    },
    models::{Product, StoreConfig, Testimonial},
    routes::{Ack, config, health, products, testimonials},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        config::get_config,
        config::put_config,
        products::list_products,
        products::create_product,
        products::get_product,
        products::update_product,
        products::delete_product,
        testimonials::list_testimonials,
        testimonials::delete_testimonial
    ),
    components(
        schemas(
            Product,
            StoreConfig,
            Testimonial,
            CreateProductRequest,
            UpdateProductRequest,
            UpdateConfigRequest,
            ProductList,
            Ack,
            health::HealthData
        )
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "config", description = "Store configuration endpoints"),
        (name = "products", description = "Product catalog endpoints"),
        (name = "testimonials", description = "Testimonial moderation endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
