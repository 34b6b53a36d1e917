use crate::{
    catalog::RouteCatalog,
    link::{build_navigation_link, MapsLinkConfig, NavigationLink},
    model::{DayOfWeek, StaffId},
};

use super::RouteRequestError;

/// resolves a staff and day selection into a navigation link.
///
/// checks run in a fixed order and the first failure is returned:
/// both selections present, a plan exists, then the stop count limits.
pub fn resolve_route(
    catalog: &RouteCatalog,
    config: &MapsLinkConfig,
    staff: &str,
    day: &str,
) -> Result<NavigationLink, RouteRequestError> {
    let staff = staff.trim();
    let day = day.trim();
    if staff.is_empty() || day.is_empty() {
        return Err(RouteRequestError::MissingSelection);
    }

    // unparseable selections cannot match any plan
    let plan = match (StaffId::parse(staff), day.parse::<DayOfWeek>()) {
        (Some(staff_id), Ok(day_of_week)) => catalog.find_plan(staff_id, day_of_week),
        _ => None,
    }
    .ok_or_else(|| RouteRequestError::PlanNotFound {
        staff: staff.to_string(),
        day: day.to_string(),
    })?;

    let link = build_navigation_link(&plan.stops, config)?;
    Ok(link)
}
