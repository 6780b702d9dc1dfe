use ponto_config::ConfigError;
use ponto_core::CoreError;
use thiserror::Error;

/// Unified error type for the core/config/storage layers.
#[derive(Error, Debug)]
pub enum PontoError {
    #[error("Employee not found: {0}")]
    EmployeeNotFound(String),
    #[error("PIN does not match")]
    PinMismatch,
    #[error("Day already complete: all four punch slots are filled")]
    DayComplete,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<CoreError> for PontoError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::EmployeeNotFound(message) => PontoError::EmployeeNotFound(message),
            CoreError::PinMismatch => PontoError::PinMismatch,
            CoreError::DayComplete => PontoError::DayComplete,
            CoreError::RecordNotFound(date) => {
                PontoError::InvalidInput(format!("no record for {date}"))
            }
            CoreError::AdjustmentNotFound(date) => {
                PontoError::InvalidInput(format!("no adjustment for {date}"))
            }
            CoreError::Validation(message) | CoreError::InvalidOperation(message) => {
                PontoError::InvalidInput(message)
            }
            CoreError::Storage(message) | CoreError::Serde(message) => {
                PontoError::Storage(message)
            }
            CoreError::Csv(err) => PontoError::Storage(err.to_string()),
            CoreError::Io(err) => PontoError::Storage(err.to_string()),
        }
    }
}

impl From<ConfigError> for PontoError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io(io) => PontoError::Storage(io.to_string()),
            ConfigError::Serde(message) => PontoError::Config(message),
        }
    }
}

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] PontoError),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        CliError::Core(PontoError::from(err))
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::Core(PontoError::from(err))
    }
}

impl From<dialoguer::Error> for CliError {
    fn from(err: dialoguer::Error) -> Self {
        CliError::Terminal(err.to_string())
    }
}
