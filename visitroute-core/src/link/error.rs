#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum LinkError {
    #[error("The plan must contain at least 2 customers to build a route.")]
    InsufficientStops { count: usize },
    #[error("Too many customers for one link. Please reduce to 25 or fewer.")]
    TooManyStops { count: usize },
    #[error("base url '{url}' for the directions service is invalid: {message}")]
    InvalidBaseUrl { url: String, message: String },
}
