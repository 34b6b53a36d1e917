use serde::{Deserialize, Serialize};

use crate::link::{NavigationLink, StopDescription};

use super::{RouteRequestError, Severity};

/// payload handed to a presentation layer
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum RouteResponse {
    Success {
        url: String,
        stops: Vec<StopDescription>,
    },
    Failure {
        severity: Severity,
        message: String,
    },
}

impl RouteResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, RouteResponse::Success { .. })
    }
}

impl From<Result<NavigationLink, RouteRequestError>> for RouteResponse {
    fn from(value: Result<NavigationLink, RouteRequestError>) -> Self {
        match value {
            Ok(link) => RouteResponse::Success {
                url: link.url,
                stops: link.stops,
            },
            Err(e) => RouteResponse::Failure {
                severity: e.severity(),
                message: e.to_string(),
            },
        }
    }
}
