use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CustomerId(pub i64);

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum CoordinateError {
    #[error("latitude {latitude} of customer {customer_id} must be in range [-90, 90]")]
    Latitude {
        customer_id: CustomerId,
        latitude: f64,
    },
    #[error("longitude {longitude} of customer {customer_id} must be in range [-180, 180]")]
    Longitude {
        customer_id: CustomerId,
        longitude: f64,
    },
}

/// a customer visit at a WGS84 location. field names follow the route plan
/// configuration format (`customer`, `lat`, `lng`).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Stop {
    #[serde(rename = "customer")]
    pub customer_id: CustomerId,
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
}

impl Stop {
    pub fn new(customer_id: i64, latitude: f64, longitude: f64) -> Stop {
        Stop {
            customer_id: CustomerId(customer_id),
            latitude,
            longitude,
        }
    }

    /// confirms latitude is in [-90, 90] and longitude in [-180, 180].
    pub fn validate(&self) -> Result<(), CoordinateError> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(CoordinateError::Latitude {
                customer_id: self.customer_id,
                latitude: self.latitude,
            });
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(CoordinateError::Longitude {
                customer_id: self.customer_id,
                longitude: self.longitude,
            });
        }
        Ok(())
    }
}
