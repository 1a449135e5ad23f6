pub mod app_config;
pub mod config;
pub mod filter;
pub mod jsonld;
pub mod product;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env, ConfigError, DEFAULT_CATALOG_URL};
pub use filter::{PriceRange, PriceSort};
pub use jsonld::product_structured_data;
pub use product::{Category, Product};
