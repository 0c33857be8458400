use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalibraError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("roster validation failed: {0} invalid row(s)")]
    RosterValidation(usize),

    #[error("invalid dataset name: {0}")]
    InvalidDatasetName(String),

    #[error("dataset already exists: {0}")]
    DatasetExists(String),

    #[error("dataset not found: {0}")]
    DatasetNotFound(String),

    #[error("employee not found: {0}")]
    EmployeeNotFound(String),

    #[error("employee is frozen: {0}")]
    EmployeeFrozen(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("toml serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CalibraError>;
