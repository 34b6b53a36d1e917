//! the request boundary: a staff selection and a day selection in, a
//! navigation link or a user-facing failure out.
mod error;
mod resolve;
mod response;

pub use error::{RouteRequestError, Severity};
pub use resolve::resolve_route;
pub use response::RouteResponse;
