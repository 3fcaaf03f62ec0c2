use std::time::Duration;

use tallgrass_battle::Pacing;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const POKEAPI_URL: &str = "https://pokeapi.co/api/v2";

/// Fixed dwell times around battle messaging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Event replay pacing and typewriter speed
    pub pacing: Pacing,
    /// Pause after a run attempt's outcome line
    pub run_outcome: Duration,
    /// Pause between the victory line and the experience line
    pub exp_notice: Duration,
    /// Pause before the session view closes at battle end
    pub end_of_battle: Duration,
    /// Longest wait for a sprite or background lookup before going without
    pub asset_timeout: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            pacing: Pacing::default(),
            run_outcome: Duration::from_millis(1500),
            exp_notice: Duration::from_millis(1500),
            end_of_battle: Duration::from_millis(3000),
            asset_timeout: Duration::from_secs(5),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Origin of the battle API
    pub base_url: String,
    /// PokeAPI root used for sprite records
    pub pokeapi_url: String,
    /// Session cookie sent with every battle API call
    pub cookie: Option<String>,
    pub timings: Timings,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            pokeapi_url: POKEAPI_URL.to_string(),
            cookie: None,
            timings: Timings::default(),
        }
    }
}

impl ClientConfig {
    /// Read overrides from the environment
    ///
    /// Optional: TALLGRASS_BASE_URL, TALLGRASS_POKEAPI_URL, TALLGRASS_COOKIE
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("TALLGRASS_BASE_URL").unwrap_or(defaults.base_url),
            pokeapi_url: std::env::var("TALLGRASS_POKEAPI_URL").unwrap_or(defaults.pokeapi_url),
            cookie: std::env::var("TALLGRASS_COOKIE").ok().filter(|c| !c.is_empty()),
            timings: defaults.timings,
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let config = ClientConfig {
            base_url: "http://game.local/".to_string(),
            ..ClientConfig::default()
        };
        assert_eq!(
            config.endpoint("/api/battle/start"),
            "http://game.local/api/battle/start"
        );
    }

    #[test]
    fn test_default_timings() {
        let timings = Timings::default();
        assert_eq!(timings.pacing.per_char, Duration::from_millis(45));
        assert_eq!(timings.end_of_battle, Duration::from_secs(3));
        assert_eq!(timings.asset_timeout, Duration::from_secs(5));
    }
}
