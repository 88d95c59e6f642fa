pub mod attendance;
pub mod config;
pub mod engine;
pub mod error;
pub mod report;
pub mod telemetry;
pub mod types;

pub use engine::{determine_status, evaluate, evaluate_roster};
pub use error::{Result, StatusError};
pub use types::attendance::{AttendanceRecord, MemberAttendance};
pub use types::config::{Criteria, EventTypeConfig, OrganizationConfig, Rule};
pub use types::status::{MemberStatus, Points, Status, StatusResult};
