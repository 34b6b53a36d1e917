use serde::{Deserialize, Serialize};

use crate::link::LinkError;

/// how a failed request is presented to the user
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RouteRequestError {
    #[error("Please select both a staff member and a day.")]
    MissingSelection,
    #[error("No route plan found for the selected staff and day.")]
    PlanNotFound { staff: String, day: String },
    #[error(transparent)]
    Link(#[from] LinkError),
}

impl RouteRequestError {
    pub fn severity(&self) -> Severity {
        match self {
            RouteRequestError::MissingSelection => Severity::Warning,
            RouteRequestError::PlanNotFound { .. } => Severity::Error,
            RouteRequestError::Link(LinkError::TooManyStops { .. }) => Severity::Warning,
            RouteRequestError::Link(LinkError::InsufficientStops { .. }) => Severity::Error,
            RouteRequestError::Link(LinkError::InvalidBaseUrl { .. }) => Severity::Error,
        }
    }
}
