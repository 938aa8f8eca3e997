//! Observability settings read from the environment.

/// Env var holding the log output format (`json` or `pretty`).
pub const LOG_FORMAT_VAR: &str = "PARTSTOCK_LOG_FORMAT";

/// Env var holding the tracing filter directive.
pub const FILTER_VAR: &str = "RUST_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Human-readable, multi-line.
    Pretty,
}

impl LogFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "pretty" | "text" => Some(Self::Pretty),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    pub format: LogFormat,
    /// `EnvFilter` directive, e.g. `info` or `partstock_console=debug`.
    pub filter: String,
    /// Set when a configured value could not be understood and a default was used.
    pub rejected: Option<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            filter: "info".to_string(),
            rejected: None,
        }
    }
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the process environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(filter) = lookup(FILTER_VAR).filter(|f| !f.trim().is_empty()) {
            config.filter = filter;
        }

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            match LogFormat::parse(&raw) {
                Some(format) => config.format = format,
                None => {
                    config.rejected = Some(format!("{LOG_FORMAT_VAR}={raw:?}; using json"));
                }
            }
        }

        config
    }
}
