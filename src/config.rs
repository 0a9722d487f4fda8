use std::collections::HashMap;
use std::net::IpAddr;
use thiserror::Error;

use crate::engine::{policy, AnalyticsPolicy, TierBounds};

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub bind_addr: IpAddr,
    pub policy: AnalyticsPolicy,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            bind_addr: IpAddr::from([127, 0, 0, 1]),
            policy: AnalyticsPolicy::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let port = env_map
            .get("PORT")
            .map(|s| s.as_str())
            .unwrap_or("8080")
            .parse::<u16>()
            .map_err(|_| {
                ConfigError::InvalidValue("PORT".to_string(), "must be a valid u16".to_string())
            })?;

        let bind_addr = env_map
            .get("BIND_ADDR")
            .map(|s| s.as_str())
            .unwrap_or("127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|_| {
                ConfigError::InvalidValue(
                    "BIND_ADDR".to_string(),
                    "must be an IPv4 or IPv6 address".to_string(),
                )
            })?;

        let margin = parse_bounds(
            &env_map,
            [
                ("MARGIN_CRITICAL_BELOW", policy::MARGIN_CRITICAL_BELOW),
                ("MARGIN_HIGH_BELOW", policy::MARGIN_HIGH_BELOW),
                ("MARGIN_MEDIUM_BELOW", policy::MARGIN_MEDIUM_BELOW),
            ],
        )?;
        let efficiency = parse_bounds(
            &env_map,
            [
                ("EFFICIENCY_CRITICAL_BELOW", policy::EFFICIENCY_CRITICAL_BELOW),
                ("EFFICIENCY_WARNING_BELOW", policy::EFFICIENCY_WARNING_BELOW),
                ("EFFICIENCY_GOOD_BELOW", policy::EFFICIENCY_GOOD_BELOW),
            ],
        )?;
        let health = parse_bounds(
            &env_map,
            [
                ("HEALTH_CRITICAL_BELOW", policy::HEALTH_CRITICAL_BELOW),
                ("HEALTH_STABLE_BELOW", policy::HEALTH_STABLE_BELOW),
                ("HEALTH_GOOD_BELOW", policy::HEALTH_GOOD_BELOW),
            ],
        )?;

        let liveness_window_ms = env_map
            .get("NODE_LIVENESS_WINDOW_MS")
            .map(|s| s.as_str())
            .unwrap_or("300000")
            .parse::<i64>()
            .ok()
            .filter(|ms| *ms > 0)
            .ok_or_else(|| {
                ConfigError::InvalidValue(
                    "NODE_LIVENESS_WINDOW_MS".to_string(),
                    "must be a positive i64".to_string(),
                )
            })?;

        Ok(Config {
            port,
            bind_addr,
            policy: AnalyticsPolicy {
                margin,
                efficiency,
                health,
                liveness_window_ms,
            },
        })
    }
}

fn parse_threshold(
    env_map: &HashMap<String, String>,
    key: &str,
    default: f64,
) -> Result<f64, ConfigError> {
    match env_map.get(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| {
                ConfigError::InvalidValue(key.to_string(), "must be a finite number".to_string())
            }),
    }
}

fn parse_bounds(
    env_map: &HashMap<String, String>,
    keys: [(&str, f64); 3],
) -> Result<TierBounds, ConfigError> {
    let [worst, second, third] = keys;
    let bounds = TierBounds::new(
        parse_threshold(env_map, worst.0, worst.1)?,
        parse_threshold(env_map, second.0, second.1)?,
        parse_threshold(env_map, third.0, third.1)?,
    );
    if !bounds.is_ascending() {
        return Err(ConfigError::InvalidValue(
            format!("{}/{}/{}", worst.0, second.0, third.0),
            format!(
                "must be strictly ascending, got {}, {}, {}",
                bounds.worst, bounds.second, bounds.third
            ),
        ));
    }
    Ok(bounds)
}
