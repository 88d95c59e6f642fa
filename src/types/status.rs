use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

pub type Points = f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Active,
    General,
}

impl Status {
    /// Inclusive comparison: meeting the requirement exactly is Active.
    pub fn classify(total_points: Points, required_points: Points) -> Self {
        if total_points >= required_points {
            Status::Active
        } else {
            Status::General
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Active => f.write_str("Active"),
            Status::General => f.write_str("General"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusResult {
    pub status: Status,
    pub total_points: Points,
    pub breakdown: BTreeMap<String, Points>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberStatus {
    pub member: String,
    #[serde(flatten)]
    pub result: StatusResult,
}
