use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AttendanceRecord {
    #[serde(alias = "eventType")]
    pub event_type: String,
    #[serde(default, alias = "eventDate")]
    pub event_date: String,
    pub hours: Option<f64>,
}

impl AttendanceRecord {
    pub fn new(event_type: impl Into<String>, event_date: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            event_date: event_date.into(),
            hours: None,
        }
    }

    pub fn with_hours(mut self, hours: f64) -> Self {
        self.hours = Some(hours);
        self
    }

    pub fn hours_or_zero(&self) -> f64 {
        self.hours.unwrap_or(0.0)
    }

    pub fn date(&self) -> Option<NaiveDate> {
        let raw = self.event_date.trim();
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .or_else(|| {
                DateTime::parse_from_rfc3339(raw)
                    .ok()
                    .map(|parsed| parsed.date_naive())
            })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MemberAttendance {
    pub member: String,
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_snake_and_camel_case_fields() {
        let records: Vec<AttendanceRecord> = serde_json::from_str(
            r#"[
                {"event_type": "General Meeting", "event_date": "2024-09-03"},
                {"eventType": "Volunteering", "eventDate": "2024-09-10", "hours": 2.5}
            ]"#,
        )
        .expect("records should parse");
        assert_eq!(records[0].event_type, "General Meeting");
        assert_eq!(records[0].hours, None);
        assert_eq!(records[1].event_type, "Volunteering");
        assert_eq!(records[1].hours_or_zero(), 2.5);
    }

    #[test]
    fn date_accepts_plain_and_rfc3339_forms() {
        let expected = NaiveDate::from_ymd_opt(2024, 9, 3);
        assert_eq!(AttendanceRecord::new("x", "2024-09-03").date(), expected);
        assert_eq!(
            AttendanceRecord::new("x", "2024-09-03T18:30:00Z").date(),
            expected
        );
        assert_eq!(AttendanceRecord::new("x", "next tuesday").date(), None);
    }

    #[test]
    fn missing_hours_count_as_zero() {
        assert_eq!(AttendanceRecord::new("x", "").hours_or_zero(), 0.0);
    }
}
