//! Service configuration
//!
//! Read once from the environment at startup.

use serde::Serialize;

pub const ENV_MAX_BATCH: &str = "NUTRISCORE_MAX_BATCH";
pub const ENV_STRICT_INPUT: &str = "NUTRISCORE_STRICT_INPUT";

const DEFAULT_MAX_BATCH: usize = 500;
const DEFAULT_STRICT_INPUT: bool = true;

/// Runtime settings for the tool layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceConfig {
    /// Maximum foods accepted by a single `score_foods` call
    pub max_batch: usize,
    /// Reject negative nutrients and out-of-range percentages
    pub strict_input: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_batch: DEFAULT_MAX_BATCH,
            strict_input: DEFAULT_STRICT_INPUT,
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unparseable values keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_MAX_BATCH) {
            match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => config.max_batch = n,
                _ => tracing::warn!("Ignoring invalid {}='{}'", ENV_MAX_BATCH, raw),
            }
        }

        if let Some(raw) = lookup(ENV_STRICT_INPUT) {
            match parse_bool(&raw) {
                Some(b) => config.strict_input = b,
                None => tracing::warn!("Ignoring invalid {}='{}'", ENV_STRICT_INPUT, raw),
            }
        }

        config
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
