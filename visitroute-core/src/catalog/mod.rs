mod catalog_config;
mod error;
mod route_catalog;

pub use catalog_config::CatalogConfig;
pub use error::CatalogError;
pub use route_catalog::RouteCatalog;
