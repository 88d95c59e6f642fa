pub mod json;
pub mod md;

use crate::engine;
use crate::error::StatusError;
use crate::types::attendance::{AttendanceRecord, MemberAttendance};
use crate::types::config::OrganizationConfig;
use crate::types::status::{MemberStatus, Points, Status};
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownEntry {
    pub event_type: String,
    pub points: Points,
    pub max_points: Option<Points>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub generated_at: String,
    pub organization: Option<String>,
    pub required_points: Points,
    pub status: Status,
    pub total_points: Points,
    /// In configuration order.
    pub breakdown: Vec<BreakdownEntry>,
    pub unscored_event_types: Vec<String>,
    pub first_attended: Option<NaiveDate>,
    pub last_attended: Option<NaiveDate>,
}

impl StatusReport {
    pub fn build(
        attendance: &[AttendanceRecord],
        config: &OrganizationConfig,
        required_points: Points,
    ) -> Self {
        let result = engine::determine_status(attendance, config, required_points);

        let mut seen = HashSet::new();
        let breakdown = config
            .event_types
            .iter()
            .filter(|event_type| seen.insert(event_type.name.as_str()))
            .map(|event_type| BreakdownEntry {
                event_type: event_type.name.clone(),
                points: result
                    .breakdown
                    .get(&event_type.name)
                    .copied()
                    .unwrap_or(0.0),
                max_points: event_type.max_points,
            })
            .collect();

        let dates = attendance
            .iter()
            .filter_map(AttendanceRecord::date)
            .collect::<Vec<_>>();

        Self {
            generated_at: Utc::now().to_rfc3339(),
            organization: config.organization.name.clone(),
            required_points,
            status: result.status,
            total_points: result.total_points,
            breakdown,
            unscored_event_types: engine::unscored_event_types(attendance, config),
            first_attended: dates.iter().min().copied(),
            last_attended: dates.iter().max().copied(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RosterReport {
    pub generated_at: String,
    pub organization: Option<String>,
    pub required_points: Points,
    pub active_count: usize,
    pub general_count: usize,
    pub members: Vec<MemberStatus>,
}

impl RosterReport {
    /// Counts cover the whole roster; `only` narrows the listed members.
    pub fn build(
        members: &[MemberAttendance],
        config: &OrganizationConfig,
        required_points: Points,
        only: Option<Status>,
    ) -> Self {
        let statuses = engine::evaluate_roster(members, config, required_points);
        let active_count = statuses
            .iter()
            .filter(|member| member.result.status == Status::Active)
            .count();
        let general_count = statuses.len() - active_count;
        let members = match only {
            Some(status) => statuses
                .into_iter()
                .filter(|member| member.result.status == status)
                .collect(),
            None => statuses,
        };

        Self {
            generated_at: Utc::now().to_rfc3339(),
            organization: config.organization.name.clone(),
            required_points,
            active_count,
            general_count,
            members,
        }
    }
}

pub fn render_status(report: &StatusReport, format: OutputFormat) -> Result<String, StatusError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(StatusError::Json),
        OutputFormat::Md => Ok(md::status_markdown(report)),
    }
}

pub fn render_roster(report: &RosterReport, format: OutputFormat) -> Result<String, StatusError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(StatusError::Json),
        OutputFormat::Md => Ok(md::roster_markdown(report)),
    }
}
