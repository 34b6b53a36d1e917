mod day_of_week;
mod route_plan;
mod staff;
mod stop;

pub use day_of_week::{DayOfWeek, DayOfWeekParseError};
pub use route_plan::RoutePlan;
pub use staff::{StaffId, StaffMember};
pub use stop::{CoordinateError, CustomerId, Stop};
