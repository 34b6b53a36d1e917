use serde::{Deserialize, Serialize};

/// identifier of a staff member. route plans reference staff by this
/// value only, there is no foreign-key relationship to the roster.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StaffId(pub i64);

impl std::fmt::Display for StaffId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StaffId {
    /// coerces a textual selection into a staff id. the text is read as a
    /// number, so "1", "1.0" and "1e0" all select staff 1. returns None for
    /// text that is not a finite whole number in i64 range, which can never
    /// match a route plan.
    pub fn parse(value: &str) -> Option<StaffId> {
        let number = value.trim().parse::<f64>().ok()?;
        let in_range = (i64::MIN as f64) <= number && number < (i64::MAX as f64);
        if number.is_finite() && number.fract() == 0.0 && in_range {
            Some(StaffId(number as i64))
        } else {
            None
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StaffMember {
    pub id: StaffId,
    pub name: String,
}

impl std::fmt::Display for StaffMember {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.id, self.name)
    }
}
