//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use crate::cache::CacheConfig;
use crate::fixture::GeneratorConfig;
use crate::planner::PlannerConfig;

/// Default listen address.
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Static assets shipped with the crate.
const DEFAULT_STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Errors reading the server configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value {value:?} for {var}: {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

/// Where the served network comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkSource {
    /// Load a JSON fixture file.
    File(PathBuf),
    /// Generate a random network.
    Generated { routes: usize, seed: u64 },
}

/// Everything the server binary needs to start.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub static_dir: String,
    pub source: NetworkSource,
    pub planner: PlannerConfig,
    pub cache: CacheConfig,
}

impl ServerConfig {
    /// Read the configuration from `FLIGHT_PLANNER_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable
    /// name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &'static str| lookup(var).filter(|v| !v.trim().is_empty());

        let addr = parse_or(&get, "FLIGHT_PLANNER_ADDR", || {
            SocketAddr::from_str(DEFAULT_ADDR).map_err(|e| e.to_string())
        })?;

        let static_dir =
            get("FLIGHT_PLANNER_STATIC").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string());

        let source = match get("FLIGHT_PLANNER_DATA") {
            Some(path) => NetworkSource::File(PathBuf::from(path)),
            None => {
                let defaults = GeneratorConfig::default();
                NetworkSource::Generated {
                    routes: parse_or(&get, "FLIGHT_PLANNER_ROUTES", || Ok(defaults.routes))?,
                    seed: parse_or(&get, "FLIGHT_PLANNER_SEED", || Ok(defaults.seed))?,
                }
            }
        };

        let defaults = PlannerConfig::default();
        let min_layover_mins = parse_or(&get, "FLIGHT_PLANNER_MIN_LAYOVER_MINS", || {
            Ok(defaults.min_layover_mins)
        })?;
        if min_layover_mins < 0 {
            return Err(ConfigError {
                var: "FLIGHT_PLANNER_MIN_LAYOVER_MINS",
                value: min_layover_mins.to_string(),
                reason: "must not be negative".to_string(),
            });
        }
        let max_options = get("FLIGHT_PLANNER_MAX_OPTIONS")
            .map(|v| parse_var("FLIGHT_PLANNER_MAX_OPTIONS", &v))
            .transpose()?;

        Ok(Self {
            addr,
            static_dir,
            source,
            planner: PlannerConfig::new(min_layover_mins, max_options),
            cache: CacheConfig::default(),
        })
    }
}

fn parse_var<T>(var: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError {
        var,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

fn parse_or<T>(
    get: &impl Fn(&'static str) -> Option<String>,
    var: &'static str,
    default: impl FnOnce() -> Result<T, String>,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match get(var) {
        Some(value) => parse_var(var, &value),
        None => default().map_err(|reason| ConfigError {
            var,
            value: String::new(),
            reason,
        }),
    }
}
