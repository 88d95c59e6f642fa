use crate::error::{Result, StatusError};
use crate::types::attendance::{AttendanceRecord, MemberAttendance};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::debug;

pub fn load_attendance(path: &Path) -> Result<Vec<AttendanceRecord>> {
    let records: Vec<AttendanceRecord> = read_json(path)?;
    debug!(path = %path.display(), records = records.len(), "loaded attendance");
    Ok(records)
}

pub fn load_roster(path: &Path) -> Result<Vec<MemberAttendance>> {
    let members: Vec<MemberAttendance> = read_json(path)?;
    debug!(path = %path.display(), members = members.len(), "loaded roster");
    Ok(members)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(StatusError::InputNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
