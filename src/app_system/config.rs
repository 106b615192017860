use tracing::warn;

pub const BUFFER_SIZE_VAR: &str = "ORDER_COMPOSER_BUFFER_SIZE";
pub const LOG_FILTER_VAR: &str = "ORDER_COMPOSER_LOG";

/// Settings for starting an [`OrderSystem`](super::OrderSystem).
#[derive(Debug, Clone, PartialEq)]
pub struct SystemConfig {
    /// Channel capacity of every actor.
    pub buffer_size: usize,
    /// Default tracing filter when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            log_filter: "info".to_string(),
        }
    }
}

impl SystemConfig {
    /// Reads overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Unusable values keep the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(BUFFER_SIZE_VAR) {
            match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => config.buffer_size = size,
                _ => warn!(value = %raw, "Ignoring invalid {}", BUFFER_SIZE_VAR),
            }
        }
        if let Some(filter) = lookup(LOG_FILTER_VAR) {
            if !filter.trim().is_empty() {
                config.log_filter = filter.trim().to_string();
            }
        }

        config
    }
}
