use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Employee not found: {0}")]
    EmployeeNotFound(String),
    #[error("No record for {0}")]
    RecordNotFound(NaiveDate),
    #[error("No adjustment for {0}")]
    AdjustmentNotFound(NaiveDate),
    #[error("PIN does not match")]
    PinMismatch,
    #[error("Day already complete: all four punch slots are filled")]
    DayComplete,
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
