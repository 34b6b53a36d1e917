mod error;
mod link_builder;
mod link_config;
mod navigation_link;

pub use error::LinkError;
pub use link_builder::{build_navigation_link, format_point, MAX_STOPS, MAX_WAYPOINTS, MIN_STOPS};
pub use link_config::{MapsLinkConfig, TravelMode};
pub use navigation_link::{NavigationLink, StopDescription, StopRole};
