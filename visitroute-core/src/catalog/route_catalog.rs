use std::collections::HashSet;

use crate::model::{DayOfWeek, RoutePlan, StaffId, StaffMember};

use super::{CatalogConfig, CatalogError};

/// immutable collection of route plans keyed by (staff id, day). built once
/// at startup and only read afterwards.
#[derive(Clone, Debug)]
pub struct RouteCatalog {
    staff: Vec<StaffMember>,
    plans: Vec<RoutePlan>,
}

impl RouteCatalog {
    /// builds a catalog, rejecting duplicate staff ids, duplicate (staff, day)
    /// plans and stops with out-of-range coordinates. plans may reference
    /// staff ids that are not in the roster.
    pub fn new(
        staff: Vec<StaffMember>,
        plans: Vec<RoutePlan>,
    ) -> Result<RouteCatalog, CatalogError> {
        let mut staff_ids: HashSet<StaffId> = HashSet::new();
        for member in staff.iter() {
            if !staff_ids.insert(member.id) {
                return Err(CatalogError::DuplicateStaff(member.id));
            }
        }

        let mut plan_keys: HashSet<(StaffId, DayOfWeek)> = HashSet::new();
        for plan in plans.iter() {
            if !plan_keys.insert((plan.staff_id, plan.day)) {
                return Err(CatalogError::DuplicatePlan {
                    staff_id: plan.staff_id,
                    day: plan.day,
                });
            }
            for stop in plan.stops.iter() {
                stop.validate().map_err(|source| CatalogError::InvalidCoordinate {
                    staff_id: plan.staff_id,
                    day: plan.day,
                    source,
                })?;
            }
            if !staff_ids.contains(&plan.staff_id) {
                log::warn!(
                    "route plan for {} references staff id {} which is not in the roster",
                    plan.day,
                    plan.staff_id
                );
            }
        }

        log::debug!(
            "built route catalog with {} staff and {} plans",
            staff.len(),
            plans.len()
        );
        Ok(RouteCatalog { staff, plans })
    }

    /// finds the plan for this staff member and day by linear scan. the
    /// first exact match is returned.
    pub fn find_plan(&self, staff_id: StaffId, day: DayOfWeek) -> Option<&RoutePlan> {
        let plan = self.plans.iter().find(|p| p.matches(staff_id, day));
        log::debug!(
            "lookup staff {staff_id} on {day}: {}",
            if plan.is_some() { "found" } else { "not found" }
        );
        plan
    }

    pub fn staff(&self) -> &[StaffMember] {
        &self.staff
    }

    pub fn staff_member(&self, staff_id: StaffId) -> Option<&StaffMember> {
        self.staff.iter().find(|s| s.id == staff_id)
    }

    pub fn plans(&self) -> &[RoutePlan] {
        &self.plans
    }
}

impl TryFrom<&CatalogConfig> for RouteCatalog {
    type Error = CatalogError;

    fn try_from(config: &CatalogConfig) -> Result<Self, Self::Error> {
        RouteCatalog::new(config.staff.clone(), config.route_plans.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CoordinateError, CustomerId, Stop};

    fn sample_config() -> CatalogConfig {
        let toml_str = r#"
            [[staff]]
            id = 1
            name = "Ahmed Ali"

            [[staff]]
            id = 2
            name = "Sara N."

            [[route_plans]]
            staff = 1
            day = "Monday"
            customers = [
                { customer = 101, lat = 24.7136, lng = 46.6753 },
                { customer = 105, lat = 24.7749, lng = 46.7386 },
            ]

            [[route_plans]]
            staff = 2
            day = "Wednesday"
            customers = [
                { customer = 201, lat = 21.4858, lng = 39.1925 },
                { customer = 205, lat = 21.4890, lng = 39.2210 },
            ]
        "#;
        toml::from_str(toml_str).unwrap()
    }

    fn plan(staff: i64, day: DayOfWeek, stops: Vec<Stop>) -> RoutePlan {
        RoutePlan {
            staff_id: StaffId(staff),
            day,
            stops,
        }
    }

    #[test]
    fn test_find_plan_exact_match() {
        let catalog = RouteCatalog::try_from(&sample_config()).unwrap();
        let found = catalog.find_plan(StaffId(1), DayOfWeek::Monday).unwrap();
        assert_eq!(found.stops.len(), 2);
        assert_eq!(found.stops[0], Stop::new(101, 24.7136, 46.6753));
    }

    #[test]
    fn test_find_plan_wrong_day_or_staff() {
        let catalog = RouteCatalog::try_from(&sample_config()).unwrap();
        assert!(catalog.find_plan(StaffId(1), DayOfWeek::Tuesday).is_none());
        assert!(catalog.find_plan(StaffId(2), DayOfWeek::Monday).is_none());
        assert!(catalog.find_plan(StaffId(3), DayOfWeek::Wednesday).is_none());
    }

    #[test]
    fn test_duplicate_plan_rejected() {
        let plans = vec![
            plan(1, DayOfWeek::Monday, vec![]),
            plan(1, DayOfWeek::Monday, vec![Stop::new(1, 0.0, 0.0)]),
        ];
        let result = RouteCatalog::new(vec![], plans);
        assert_eq!(
            result.unwrap_err(),
            CatalogError::DuplicatePlan {
                staff_id: StaffId(1),
                day: DayOfWeek::Monday
            }
        );
    }

    #[test]
    fn test_duplicate_staff_rejected() {
        let staff = vec![
            StaffMember {
                id: StaffId(7),
                name: String::from("a"),
            },
            StaffMember {
                id: StaffId(7),
                name: String::from("b"),
            },
        ];
        let result = RouteCatalog::new(staff, vec![]);
        assert_eq!(result.unwrap_err(), CatalogError::DuplicateStaff(StaffId(7)));
    }

    #[test]
    fn test_invalid_coordinate_rejected() {
        let plans = vec![plan(
            1,
            DayOfWeek::Sunday,
            vec![Stop::new(1, 0.0, 0.0), Stop::new(2, 91.0, 0.0)],
        )];
        let result = RouteCatalog::new(vec![], plans);
        assert_eq!(
            result.unwrap_err(),
            CatalogError::InvalidCoordinate {
                staff_id: StaffId(1),
                day: DayOfWeek::Sunday,
                source: CoordinateError::Latitude {
                    customer_id: CustomerId(2),
                    latitude: 91.0,
                },
            }
        );
    }

    #[test]
    fn test_plan_for_unknown_staff_is_accepted() {
        let plans = vec![plan(99, DayOfWeek::Friday, vec![])];
        let catalog = RouteCatalog::new(vec![], plans).unwrap();
        assert!(catalog.find_plan(StaffId(99), DayOfWeek::Friday).is_some());
        assert!(catalog.staff_member(StaffId(99)).is_none());
    }

    #[test]
    fn test_roster_accessors() {
        let catalog = RouteCatalog::try_from(&sample_config()).unwrap();
        assert_eq!(catalog.staff().len(), 2);
        assert_eq!(catalog.plans().len(), 2);
        let member = catalog.staff_member(StaffId(2)).unwrap();
        assert_eq!(member.name, "Sara N.");
    }
}
