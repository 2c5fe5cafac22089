mod config;
mod error;
mod logger;
mod object;

pub use config::LoggerConfig;
pub use error::{LoggerError, LoggerResult};
pub use object::{LoggerFormat, LoggerLevel, LoggerRfc3339, LoggerTimeZone, init_local_offset};

/// Installs the global tracing subscriber described by `cfg`.
///
/// Once installed, every `tracing` event emitted by the Conduit crates goes through it.
/// With [`LoggerTimeZone::Local`], call [`init_local_offset`] in `main()` before
/// spawning any threads.
///
/// # Examples
/// ```rust
/// use conduit_observe::{LoggerConfig, init_logger};
///
/// let config = LoggerConfig::default();
/// init_logger(&config).expect("Failed to initialize logger");
///
/// tracing::info!("logger ready");
/// ```
pub fn init_logger(cfg: &LoggerConfig) -> LoggerResult<()> {
    match cfg.format {
        LoggerFormat::Text => logger::logger_text(cfg),
        LoggerFormat::Json => logger::logger_json(cfg),
    }
}
