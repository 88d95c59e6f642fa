pub mod rules;

pub use rules::evaluate;

use crate::types::attendance::{AttendanceRecord, MemberAttendance};
use crate::types::config::OrganizationConfig;
use crate::types::status::{MemberStatus, Points, Status, StatusResult};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::debug;

/// Classify one member from their full attendance history.
///
/// Records whose event type is not configured are dropped. When a name is
/// configured more than once only its first definition is scored.
pub fn determine_status(
    attendance: &[AttendanceRecord],
    config: &OrganizationConfig,
    required_points: Points,
) -> StatusResult {
    let buckets = group_by_event_type(attendance, config);

    let mut breakdown: BTreeMap<String, Points> = BTreeMap::new();
    let mut total_points: Points = 0.0;
    for event_type in &config.event_types {
        if breakdown.contains_key(&event_type.name) {
            debug!(event_type = %event_type.name, "skipping duplicate event type definition");
            continue;
        }
        let events = buckets
            .get(event_type.name.as_str())
            .map(Vec::as_slice)
            .unwrap_or_default();
        let points = evaluate(events, event_type);
        breakdown.insert(event_type.name.clone(), points);
        total_points += points;
    }

    StatusResult {
        status: Status::classify(total_points, required_points),
        total_points,
        breakdown,
    }
}

pub fn evaluate_roster(
    members: &[MemberAttendance],
    config: &OrganizationConfig,
    required_points: Points,
) -> Vec<MemberStatus> {
    members
        .iter()
        .map(|member| MemberStatus {
            member: member.member.clone(),
            result: determine_status(&member.attendance, config, required_points),
        })
        .collect()
}

pub fn unscored_event_types(
    attendance: &[AttendanceRecord],
    config: &OrganizationConfig,
) -> Vec<String> {
    attendance
        .iter()
        .filter(|record| config.event_type(&record.event_type).is_none())
        .map(|record| record.event_type.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn group_by_event_type<'a>(
    attendance: &'a [AttendanceRecord],
    config: &OrganizationConfig,
) -> HashMap<&'a str, Vec<AttendanceRecord>> {
    let mut buckets: HashMap<&'a str, Vec<AttendanceRecord>> = HashMap::new();
    for record in attendance {
        if config.event_type(&record.event_type).is_none() {
            debug!(event_type = %record.event_type, "dropping attendance for unscored event type");
            continue;
        }
        buckets
            .entry(record.event_type.as_str())
            .or_default()
            .push(record.clone());
    }
    buckets
}
