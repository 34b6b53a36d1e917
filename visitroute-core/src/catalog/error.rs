use crate::model::{CoordinateError, DayOfWeek, StaffId};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("route plan for staff {staff_id} on {day} is defined more than once")]
    DuplicatePlan { staff_id: StaffId, day: DayOfWeek },
    #[error("staff id {0} appears more than once in the roster")]
    DuplicateStaff(StaffId),
    #[error("route plan for staff {staff_id} on {day} has an invalid stop: {source}")]
    InvalidCoordinate {
        staff_id: StaffId,
        day: DayOfWeek,
        source: CoordinateError,
    },
}
