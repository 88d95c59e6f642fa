use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatusError {
    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("input file not found: {0}")]
    InputNotFound(String),

    #[error("required points not set: pass --required-points or set organization.required_points")]
    MissingRequiredPoints,

    #[error("telemetry error: {0}")]
    Telemetry(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StatusError>;
