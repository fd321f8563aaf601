//! Environment-driven TUI configuration.
use std::env;

/// Terminal UI settings, read from the environment with sane defaults.
#[derive(Clone, Debug)]
pub struct TuiConfig {
    /// Input poll interval in milliseconds.
    pub tick_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self { tick_ms: 16 }
    }
}

impl TuiConfig {
    /// Reads `WYRMDEX_TICK_MS`; unset or unparsable values fall back to
    /// the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let tick_ms = env::var("WYRMDEX_TICK_MS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(defaults.tick_ms);
        Self { tick_ms }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_env() {
        let config = TuiConfig::default();
        assert_eq!(config.tick_ms, 16);
    }
}
