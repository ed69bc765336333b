use std::env;

/// Host configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Probability that a dispatched change fails (default: 0.0)
    pub failure_rate: f64,
    /// Number of generated events when no events file is given (default: 8)
    pub seed_events: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TRIPBOARD_FAILURE_RATE` - Chance in `[0, 1]` that a change fails (default: 0.0)
    /// - `TRIPBOARD_SEED_EVENTS` - Generated event count (default: 8)
    pub fn from_env() -> Self {
        Self {
            failure_rate: env::var("TRIPBOARD_FAILURE_RATE")
                .ok()
                .and_then(|v| v.parse::<f64>().ok())
                .map(|rate| rate.clamp(0.0, 1.0))
                .unwrap_or(0.0),
            seed_events: env::var("TRIPBOARD_SEED_EVENTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
