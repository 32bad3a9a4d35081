//! Engine configuration.
//!
//! Read from the environment for binaries, or from a JSON blob handed over
//! by the host application.

use std::env;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::domain::rules::PLAYERS;
use crate::domain::PlayerId;
use crate::errors::ErrorCode;

pub const LOCAL_SEAT_VAR: &str = "DOKO_LOCAL_SEAT";
pub const OPTIMISTIC_VAR: &str = "DOKO_OPTIMISTIC";
pub const STRICT_VERSIONS_VAR: &str = "DOKO_STRICT_VERSIONS";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {name}: {reason}")]
    InvalidVar {
        name: &'static str,
        value: String,
        reason: &'static str,
    },
}

impl ConfigError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::ConfigError
    }
}

/// Behaviour switches for one [`Engine`](crate::engine::Engine).
///
/// ```json
/// {"local_seat": 2, "optimistic_updates": true, "strict_versions": false}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seat this engine plays for.
    pub local_seat: PlayerId,
    /// Apply intents locally before the peer confirms them.
    pub optimistic_updates: bool,
    /// Refuse snapshots older than the last applied one.
    pub strict_versions: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            local_seat: 0,
            optimistic_updates: true,
            strict_versions: true,
        }
    }
}

impl EngineConfig {
    /// Defaults overridden by `DOKO_*` variables. Unset variables keep their
    /// default; set but malformed ones are an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let local_seat = match opt_var(LOCAL_SEAT_VAR) {
            Some(raw) => parse_seat(&raw)?,
            None => defaults.local_seat,
        };
        let optimistic_updates = match opt_var(OPTIMISTIC_VAR) {
            Some(raw) => parse_flag(OPTIMISTIC_VAR, &raw)?,
            None => defaults.optimistic_updates,
        };
        let strict_versions = match opt_var(STRICT_VERSIONS_VAR) {
            Some(raw) => parse_flag(STRICT_VERSIONS_VAR, &raw)?,
            None => defaults.strict_versions,
        };
        Ok(Self {
            local_seat,
            optimistic_updates,
            strict_versions,
        })
    }

    /// Lenient JSON form: missing fields take defaults, and anything that
    /// does not deserialize (including an out-of-range seat) yields the
    /// full default config.
    pub fn from_json(config: Option<&JsonValue>) -> Self {
        config
            .and_then(|json| serde_json::from_value::<Self>(json.clone()).ok())
            .filter(|c| (c.local_seat as usize) < PLAYERS)
            .unwrap_or_default()
    }
}

fn opt_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_seat(raw: &str) -> Result<PlayerId, ConfigError> {
    let invalid = |reason| ConfigError::InvalidVar {
        name: LOCAL_SEAT_VAR,
        value: raw.to_string(),
        reason,
    };
    let seat: PlayerId = raw.trim().parse().map_err(|_| invalid("not a number"))?;
    if (seat as usize) >= PLAYERS {
        return Err(invalid("seat must be 0..=3"));
    }
    Ok(seat)
}

fn parse_flag(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidVar {
            name,
            value: raw.to_string(),
            reason: "expected a boolean",
        }),
    }
}
