use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::logger::LoggerError;

/// Validated `EnvFilter` expression (e.g. `"info"`, `"conduit_api=trace,info"`).
///
/// The raw string is kept for serialization and turned into a filter on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LoggerLevel(String);

impl LoggerLevel {
    pub fn new(s: impl Into<String>) -> Result<Self, LoggerError> {
        Self::try_from(s.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Builds the filter; falls back to `info` if the expression stopped parsing.
    pub fn to_env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(self.as_str()).unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

impl Default for LoggerLevel {
    fn default() -> Self {
        Self("info".to_string())
    }
}

impl FromStr for LoggerLevel {
    type Err = LoggerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_owned())
    }
}

impl TryFrom<String> for LoggerLevel {
    type Error = LoggerError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        match EnvFilter::try_new(&s) {
            Ok(_) => Ok(LoggerLevel(s)),
            Err(e) => Err(LoggerError::InvalidLevel(format!("{s}: {e}"))),
        }
    }
}

impl From<LoggerLevel> for String {
    fn from(l: LoggerLevel) -> Self {
        l.0
    }
}

#[cfg(test)]
mod tests {
    use super::LoggerLevel;

    #[test]
    fn accepts_valid_levels() {
        for lvl in ["info", "warn", "debug", "conduit_api=trace,conduit_k8s=debug,info"] {
            let parsed = lvl.parse::<LoggerLevel>();
            assert!(parsed.is_ok(), "expected valid level for {lvl}, got: {parsed:?}");
        }
    }

    #[test]
    fn rejects_invalid_levels() {
        for lvl in ["conduit_api=loud", "other=trace,another=wat"] {
            assert!(
                lvl.parse::<LoggerLevel>().is_err(),
                "expected error for invalid level {lvl}"
            );
        }
    }

    #[test]
    fn serde_from_plain_string() {
        let lvl: LoggerLevel = serde_json::from_str(r#""debug""#).unwrap();
        assert_eq!(lvl.as_str(), "debug");
        assert_eq!(serde_json::to_string(&lvl).unwrap(), r#""debug""#);
    }

    #[test]
    fn default_is_info() {
        let lvl = LoggerLevel::default();
        assert_eq!(lvl.as_str(), "info");
        let _filter = lvl.to_env_filter();
    }
}
