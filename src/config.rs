/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::FloorInput;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub scenarios: Vec<ScenarioConfig>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SimulationConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    pub default_scenario: Option<usize>,
    pub auto_tick_ms: Option<u64>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub description: String,
    #[serde(default)]
    pub elevators: Vec<ElevatorConfig>,
    #[serde(default)]
    pub passengers: Vec<PassengerConfig>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ElevatorConfig {
    pub lowest_floor: FloorInput,
    pub highest_floor: FloorInput,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PassengerConfig {
    pub name: String,
    pub origin_floor: FloorInput,
    pub destination_floor: FloorInput,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("No such scenario: {0}")]
    UnknownScenario(usize),
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            log_level: default_log_level(),
            default_scenario: None,
            auto_tick_ms: None,
        }
    }
}

impl Config {
    /// Looks a scenario up by its 1-based position in the file.
    pub fn scenario(&self, number: usize) -> Result<&ScenarioConfig, ConfigError> {
        number
            .checked_sub(1)
            .and_then(|index| self.scenarios.get(index))
            .ok_or(ConfigError::UnknownScenario(number))
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let config_str = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_config(&config_str)
}

pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(config_str)?)
}
