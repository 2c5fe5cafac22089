use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("invalid log format: {0} (expected: text|json)")]
    InvalidFormat(String),

    #[error("logger already initialized")]
    AlreadyInitialized,

    #[error("invalid timezone: {0} (expected: utc|local)")]
    InvalidTimeZone(String),

    #[error("invalid log level: {0}")]
    InvalidLevel(String),
}

pub type LoggerResult<T> = Result<T, LoggerError>;
