pub mod config_service;
pub mod product_service;
pub mod testimonial_service;
