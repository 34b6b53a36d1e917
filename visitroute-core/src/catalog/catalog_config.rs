use serde::{Deserialize, Serialize};

use crate::model::{RoutePlan, StaffMember};

/// serializable roster and route plans. builds to a [`super::RouteCatalog`].
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct CatalogConfig {
    /// staff members available for selection
    #[serde(default)]
    pub staff: Vec<StaffMember>,
    /// at most one plan per (staff, day) pair
    #[serde(default)]
    pub route_plans: Vec<RoutePlan>,
}
