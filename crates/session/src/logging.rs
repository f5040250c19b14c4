//! Logging setup for front ends embedding a session.
//!
//! The engine only emits `tracing` events. A front end that wants them on
//! stderr calls `init_logging` once at startup.

use tracing::Level;

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level for everything outside the engine.
    pub level: Level,
    /// Log level for the macrodiff crates.
    pub engine_level: Level,
    /// Environment filter override.
    pub env_filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            engine_level: Level::INFO,
            env_filter: None,
        }
    }
}

impl LoggingConfig {
    /// Debug output from the engine: diff parameters, totals and timings.
    pub fn development() -> Self {
        Self {
            level: Level::INFO,
            engine_level: Level::DEBUG,
            env_filter: None,
        }
    }

    /// Sets the log level for the macrodiff crates.
    pub fn with_engine_level(mut self, level: Level) -> Self {
        self.engine_level = level;
        self
    }

    /// Sets a custom environment filter.
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Builds the environment filter string.
    pub fn env_filter(&self) -> String {
        if let Some(ref filter) = self.env_filter {
            return filter.clone();
        }
        let engine = self.engine_level.as_str().to_lowercase();
        format!(
            "{},macrodiff_query={},macrodiff_session={}",
            self.level.as_str().to_lowercase(),
            engine,
            engine
        )
    }
}

/// Installs a global fmt subscriber. `RUST_LOG` takes precedence over the
/// configured filter.
///
/// Fails if a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(config.env_filter())?,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_string() {
        assert_eq!(
            LoggingConfig::default().env_filter(),
            "warn,macrodiff_query=info,macrodiff_session=info"
        );
        assert_eq!(
            LoggingConfig::development().env_filter(),
            "info,macrodiff_query=debug,macrodiff_session=debug"
        );
        assert_eq!(
            LoggingConfig::default()
                .with_env_filter("macrodiff_query=trace")
                .env_filter(),
            "macrodiff_query=trace"
        );
    }

    #[test]
    fn test_engine_level() {
        let config = LoggingConfig::default().with_engine_level(Level::TRACE);
        assert!(config.env_filter().ends_with("macrodiff_session=trace"));
    }
}
