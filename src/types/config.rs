use crate::error::StatusError;
use crate::types::status::Points;
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrganizationConfig {
    #[serde(default)]
    pub organization: OrganizationSection,
    #[serde(default)]
    pub event_types: Vec<EventTypeConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrganizationSection {
    pub name: Option<String>,
    pub required_points: Option<Points>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EventTypeConfig {
    pub name: String,
    #[serde(default)]
    pub rules: Vec<Rule>,
    pub occurrence_total: Option<f64>,
    pub max_points: Option<Points>,
}

impl EventTypeConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
            occurrence_total: None,
            max_points: None,
        }
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn with_occurrence_total(mut self, total: f64) -> Self {
        self.occurrence_total = Some(total);
        self
    }

    pub fn with_max_points(mut self, max: Points) -> Self {
        self.max_points = Some(max);
        self
    }

    /// Denominator for percentage rules. Absent, zero and NaN all mean the
    /// percentage rules are skipped.
    pub fn percentage_denominator(&self) -> Option<f64> {
        self.occurrence_total.filter(|total| *total != 0.0 && !total.is_nan())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Rule {
    pub criteria: Criteria,
    pub point_value: Points,
    pub criteria_value: Option<f64>,
}

impl Rule {
    pub fn new(criteria: Criteria, point_value: Points) -> Self {
        Self {
            criteria,
            point_value,
            criteria_value: None,
        }
    }

    pub fn threshold(criteria: Criteria, criteria_value: f64, point_value: Points) -> Self {
        Self {
            criteria,
            point_value,
            criteria_value: Some(criteria_value),
        }
    }

    pub fn threshold_value(&self) -> Option<f64> {
        self.criteria_value.filter(|value| !value.is_nan())
    }
}

/// Aggregation strategy a rule uses. Labels that are not recognised are kept
/// in `Unknown` and contribute no points.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Criteria {
    Attendance,
    OneOff,
    MinimumThresholdPercentage,
    MinimumThresholdHours,
    Unknown(String),
}

impl Criteria {
    pub fn label(&self) -> &str {
        match self {
            Criteria::Attendance => "attendance",
            Criteria::OneOff => "one off",
            Criteria::MinimumThresholdPercentage => "minimum threshold percentage",
            Criteria::MinimumThresholdHours => "minimum threshold hours",
            Criteria::Unknown(label) => label,
        }
    }

    fn is_threshold(&self) -> bool {
        matches!(
            self,
            Criteria::MinimumThresholdPercentage | Criteria::MinimumThresholdHours
        )
    }
}

impl From<String> for Criteria {
    fn from(value: String) -> Self {
        match value.as_str() {
            "attendance" => Criteria::Attendance,
            "one off" => Criteria::OneOff,
            "minimum threshold percentage" => Criteria::MinimumThresholdPercentage,
            "minimum threshold hours" => Criteria::MinimumThresholdHours,
            _ => Criteria::Unknown(value),
        }
    }
}

impl From<&str> for Criteria {
    fn from(value: &str) -> Self {
        Criteria::from(value.to_string())
    }
}

impl OrganizationConfig {
    pub fn new(event_types: Vec<EventTypeConfig>) -> Self {
        Self {
            organization: OrganizationSection::default(),
            event_types,
        }
    }

    pub fn event_type(&self, name: &str) -> Option<&EventTypeConfig> {
        self.event_types
            .iter()
            .find(|event_type| event_type.name == name)
    }

    pub fn validate(&self) -> Result<(), StatusError> {
        if let Some(required_points) = self.organization.required_points {
            if !required_points.is_finite() {
                return Err(StatusError::InvalidConfig(
                    "organization.required_points must be a finite number".to_string(),
                ));
            }
        }

        let mut seen = HashSet::<&str>::new();
        for event_type in &self.event_types {
            let name = event_type.name.trim();
            if name.is_empty() {
                return Err(StatusError::InvalidConfig(
                    "event_types.name must be non-empty".to_string(),
                ));
            }
            if !seen.insert(event_type.name.as_str()) {
                return Err(StatusError::InvalidConfig(format!(
                    "event type '{}' is defined more than once",
                    event_type.name
                )));
            }
            validate_event_type(event_type)?;
        }

        Ok(())
    }
}

fn validate_event_type(event_type: &EventTypeConfig) -> Result<(), StatusError> {
    let name = &event_type.name;
    if let Some(total) = event_type.occurrence_total {
        if !total.is_finite() || total < 0.0 {
            return Err(StatusError::InvalidConfig(format!(
                "{name}: occurrence_total must be a non-negative number"
            )));
        }
    }
    if let Some(max_points) = event_type.max_points {
        if !max_points.is_finite() || max_points < 0.0 {
            return Err(StatusError::InvalidConfig(format!(
                "{name}: max_points must be a non-negative number"
            )));
        }
    }

    for rule in &event_type.rules {
        if let Criteria::Unknown(label) = &rule.criteria {
            return Err(StatusError::InvalidConfig(format!(
                "{name}: unsupported rule criteria '{label}'"
            )));
        }
        if !rule.point_value.is_finite() || rule.point_value < 0.0 {
            return Err(StatusError::InvalidConfig(format!(
                "{name}: point_value for '{}' must be a non-negative number",
                rule.criteria.label()
            )));
        }
        if !rule.criteria.is_threshold() {
            continue;
        }
        let Some(value) = rule.threshold_value() else {
            return Err(StatusError::InvalidConfig(format!(
                "{name}: '{}' rule requires criteria_value",
                rule.criteria.label()
            )));
        };
        match rule.criteria {
            Criteria::MinimumThresholdPercentage if !(0.0..=1.0).contains(&value) => {
                return Err(StatusError::InvalidConfig(format!(
                    "{name}: percentage criteria_value must be between 0.0 and 1.0 (found {value})"
                )));
            }
            Criteria::MinimumThresholdHours if !value.is_finite() || value < 0.0 => {
                return Err(StatusError::InvalidConfig(format!(
                    "{name}: hours criteria_value must be a non-negative number (found {value})"
                )));
            }
            _ => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[organization]
name = "Robotics Club"
required_points = 10

[[event_types]]
name = "General Meeting"
occurrence_total = 10
max_points = 8

[[event_types.rules]]
criteria = "attendance"
point_value = 1

[[event_types.rules]]
criteria = "minimum threshold percentage"
point_value = 3
criteria_value = 0.5

[[event_types]]
name = "Volunteering"

[[event_types.rules]]
criteria = "minimum threshold hours"
point_value = 5
criteria_value = 4.5
"#;

    #[test]
    fn parses_organization_and_event_types() {
        let cfg: OrganizationConfig = toml::from_str(SAMPLE).expect("config should parse");
        assert_eq!(cfg.organization.name.as_deref(), Some("Robotics Club"));
        assert_eq!(cfg.organization.required_points, Some(10.0));
        assert_eq!(cfg.event_types.len(), 2);

        let meeting = cfg.event_type("General Meeting").expect("meeting configured");
        assert_eq!(meeting.occurrence_total, Some(10.0));
        assert_eq!(meeting.max_points, Some(8.0));
        assert_eq!(meeting.rules[0].criteria, Criteria::Attendance);
        assert_eq!(
            meeting.rules[1].criteria,
            Criteria::MinimumThresholdPercentage
        );

        let volunteering = cfg.event_type("Volunteering").expect("volunteering configured");
        assert_eq!(volunteering.occurrence_total, None);
        assert_eq!(volunteering.max_points, None);
        assert_eq!(volunteering.rules[0].criteria_value, Some(4.5));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn missing_rules_default_to_empty() {
        let cfg: OrganizationConfig = toml::from_str(
            r#"
[[event_types]]
name = "Social"
"#,
        )
        .expect("config should parse");
        assert!(cfg.event_types[0].rules.is_empty());
        assert!(cfg.organization.required_points.is_none());
    }

    #[test]
    fn unrecognised_criteria_is_kept_as_unknown() {
        let cfg: OrganizationConfig = toml::from_str(
            r#"
[[event_types]]
name = "Social"

[[event_types.rules]]
criteria = "streak bonus"
point_value = 2
"#,
        )
        .expect("unknown criteria should still parse");
        assert_eq!(
            cfg.event_types[0].rules[0].criteria,
            Criteria::Unknown("streak bonus".to_string())
        );
    }

    #[test]
    fn percentage_denominator_skips_absent_zero_and_nan() {
        let base = EventTypeConfig::new("Meeting");
        assert_eq!(base.percentage_denominator(), None);
        assert_eq!(
            base.clone().with_occurrence_total(0.0).percentage_denominator(),
            None
        );
        assert_eq!(
            base.clone()
                .with_occurrence_total(f64::NAN)
                .percentage_denominator(),
            None
        );
        assert_eq!(
            base.with_occurrence_total(12.0).percentage_denominator(),
            Some(12.0)
        );
    }

    #[test]
    fn validate_rejects_duplicate_event_type_names() {
        let cfg = OrganizationConfig::new(vec![
            EventTypeConfig::new("Meeting"),
            EventTypeConfig::new("Meeting"),
        ]);
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("defined more than once"));
    }

    #[test]
    fn validate_rejects_threshold_without_value() {
        let cfg = OrganizationConfig::new(vec![EventTypeConfig::new("Meeting")
            .with_rule(Rule::new(Criteria::MinimumThresholdHours, 3.0))]);
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("requires criteria_value"));
    }

    #[test]
    fn validate_rejects_percentage_outside_unit_range() {
        let cfg = OrganizationConfig::new(vec![EventTypeConfig::new("Meeting").with_rule(
            Rule::threshold(Criteria::MinimumThresholdPercentage, 75.0, 3.0),
        )]);
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("between 0.0 and 1.0"));
    }

    #[test]
    fn validate_rejects_unknown_criteria_and_negative_points() {
        let unknown = OrganizationConfig::new(vec![
            EventTypeConfig::new("Meeting").with_rule(Rule::new(Criteria::from("streak"), 1.0))
        ]);
        let err = unknown.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("unsupported rule criteria 'streak'"));

        let negative = OrganizationConfig::new(vec![
            EventTypeConfig::new("Meeting").with_rule(Rule::new(Criteria::Attendance, -1.0))
        ]);
        let err = negative.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("point_value"));
    }

    #[test]
    fn validate_rejects_negative_cap_and_empty_name() {
        let capped =
            OrganizationConfig::new(vec![EventTypeConfig::new("Meeting").with_max_points(-2.0)]);
        assert!(capped.validate().is_err());

        let unnamed = OrganizationConfig::new(vec![EventTypeConfig::new("  ")]);
        let err = unnamed.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("must be non-empty"));
    }

    #[test]
    fn validate_accepts_boundary_thresholds() {
        let cfg = OrganizationConfig::new(vec![EventTypeConfig::new("Meeting")
            .with_occurrence_total(0.0)
            .with_max_points(0.0)
            .with_rule(Rule::threshold(
                Criteria::MinimumThresholdPercentage,
                1.0,
                2.0,
            ))
            .with_rule(Rule::threshold(Criteria::MinimumThresholdHours, 0.0, 1.0))]);
        assert!(cfg.validate().is_ok());
    }
}
