use visitroute_core::catalog::CatalogError;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Invalid configuration: {0}")]
    Configuration(String),
    #[error("Failed to build route catalog: {0}")]
    Catalog(#[from] CatalogError),
    #[error("Failed to serialize output: {0}")]
    Serialization(String),
}
