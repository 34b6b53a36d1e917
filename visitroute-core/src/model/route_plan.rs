use serde::{Deserialize, Serialize};

use super::{DayOfWeek, StaffId, Stop};

/// the fixed, ordered list of customer stops one staff member visits on one
/// day. the first stop is the origin and the last is the destination.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RoutePlan {
    #[serde(rename = "staff")]
    pub staff_id: StaffId,
    pub day: DayOfWeek,
    /// an absent list is read as empty and fails link validation later.
    #[serde(rename = "customers", default)]
    pub stops: Vec<Stop>,
}

impl RoutePlan {
    pub fn matches(&self, staff_id: StaffId, day: DayOfWeek) -> bool {
        self.staff_id == staff_id && self.day == day
    }
}
