//! Process-level configuration.
//!
//! Everything here is read from the environment; per-invocation settings
//! (start id, count, output format) are flags on [`crate::commands::Cli`].

/// CLI configuration (env-driven).
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit logs as JSON lines.
    pub json_logs: bool,

    /// Colorize error output and logs.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            json_logs: false,
            color: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let log_level = lookup("LEXID_LOG_LEVEL").unwrap_or(defaults.log_level);

        let json_logs = lookup("LEXID_LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(defaults.json_logs);

        let color = lookup("NO_COLOR").is_none()
            && !lookup("LEXID_NO_COLOR").is_some_and(|v| is_truthy(&v));

        Self {
            log_level,
            json_logs,
            color,
        }
    }
}

fn is_truthy(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}
