pub mod catalog;
pub mod link;
pub mod model;
pub mod request;
