use serde::{Deserialize, Serialize};

use crate::model::{CustomerId, Stop};

/// the part a stop plays in a route
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopRole {
    Start,
    Stop,
    End,
}

impl StopRole {
    /// role of the stop at `index` in a route of `count` stops.
    pub fn at(index: usize, count: usize) -> StopRole {
        if index == 0 {
            StopRole::Start
        } else if index + 1 == count {
            StopRole::End
        } else {
            StopRole::Stop
        }
    }
}

impl std::fmt::Display for StopRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StopRole::Start => "Start",
            StopRole::Stop => "Stop",
            StopRole::End => "End",
        };
        write!(f, "{s}")
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StopDescription {
    pub role: StopRole,
    pub customer_id: CustomerId,
    pub latitude: f64,
    pub longitude: f64,
}

impl StopDescription {
    pub fn new(role: StopRole, stop: &Stop) -> StopDescription {
        StopDescription {
            role,
            customer_id: stop.customer_id,
            latitude: stop.latitude,
            longitude: stop.longitude,
        }
    }
}

impl std::fmt::Display for StopDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - Customer {}: ({}, {})",
            self.role, self.customer_id, self.latitude, self.longitude
        )
    }
}

/// a directions url and the stops it visits, in visiting order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NavigationLink {
    pub url: String,
    pub stops: Vec<StopDescription>,
}
