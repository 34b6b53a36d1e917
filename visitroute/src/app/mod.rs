mod app_config;
mod error;
mod render;
mod visitroute_app;

pub use app_config::{VisitRouteConfig, DEFAULT_CONFIGURATION};
pub use error::AppError;
pub use render::{render_days, render_plans, render_response, render_staff, OutputFormat};
pub use visitroute_app::{link_response, VisitRouteApp, VisitRouteOperation};
