use crate::types::attendance::AttendanceRecord;
use crate::types::config::{Criteria, EventTypeConfig, Rule};
use crate::types::status::Points;
use tracing::{debug, trace};

#[derive(Debug, Default)]
pub(crate) struct CriteriaGroups<'a> {
    pub attendance: Vec<&'a Rule>,
    pub one_off: Vec<&'a Rule>,
    pub percentage: Vec<&'a Rule>,
    pub hours: Vec<&'a Rule>,
}

impl<'a> CriteriaGroups<'a> {
    pub(crate) fn from_rules(event_type: &str, rules: &'a [Rule]) -> Self {
        let mut groups = Self::default();
        for rule in rules {
            match &rule.criteria {
                Criteria::Attendance => groups.attendance.push(rule),
                Criteria::OneOff => groups.one_off.push(rule),
                Criteria::MinimumThresholdPercentage => groups.percentage.push(rule),
                Criteria::MinimumThresholdHours => groups.hours.push(rule),
                Criteria::Unknown(label) => {
                    debug!(event_type, criteria = %label, "ignoring rule with unknown criteria");
                }
            }
        }
        groups
    }
}

/// Points earned for one event type. The total is capped at `max_points`
/// once, after every rule kind has been summed, and is never negative.
pub fn evaluate(events: &[AttendanceRecord], config: &EventTypeConfig) -> Points {
    let groups = CriteriaGroups::from_rules(&config.name, &config.rules);
    let count = events.len() as f64;

    let mut total = attendance_points(&groups.attendance, count);
    total += one_off_points(&groups.one_off, count);

    match config.percentage_denominator() {
        Some(denominator) => {
            total += percentage_points(&groups.percentage, count / denominator);
        }
        None if !groups.percentage.is_empty() => {
            debug!(
                event_type = %config.name,
                "skipping percentage rules without an occurrence total"
            );
        }
        None => {}
    }

    let total_hours: f64 = events.iter().map(AttendanceRecord::hours_or_zero).sum();
    total += hours_points(&groups.hours, total_hours);

    let capped = match config.max_points {
        Some(max_points) => total.min(max_points),
        None => total,
    };
    let points = capped.max(0.0);
    trace!(event_type = %config.name, events = events.len(), points, "evaluated event type");
    points
}

fn attendance_points(rules: &[&Rule], count: f64) -> Points {
    let per_event: Points = rules.iter().map(|rule| rule.point_value).sum();
    count * per_event
}

fn one_off_points(rules: &[&Rule], count: f64) -> Points {
    if count > 0.0 {
        rules.iter().map(|rule| rule.point_value).sum()
    } else {
        0.0
    }
}

// Cumulative: every threshold reached pays.
fn percentage_points(rules: &[&Rule], rate: f64) -> Points {
    descending_thresholds(rules)
        .into_iter()
        .filter(|(threshold, _)| rate >= *threshold)
        .map(|(_, rule)| rule.point_value)
        .sum()
}

// Tiered: only the highest threshold reached pays.
fn hours_points(rules: &[&Rule], total_hours: f64) -> Points {
    descending_thresholds(rules)
        .into_iter()
        .find(|(threshold, _)| total_hours >= *threshold)
        .map(|(_, rule)| rule.point_value)
        .unwrap_or(0.0)
}

fn descending_thresholds<'a>(rules: &[&'a Rule]) -> Vec<(f64, &'a Rule)> {
    let mut thresholds = rules
        .iter()
        .filter_map(|rule| rule.threshold_value().map(|value| (value, *rule)))
        .collect::<Vec<_>>();
    thresholds.sort_by(|(left, _), (right, _)| right.total_cmp(left));
    thresholds
}
