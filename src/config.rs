/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;
use std::path::Path;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{ConfigError, FloorRange};

/***************************************/
/*              Defaults               */
/***************************************/
pub const MIN_FLOOR: i32 = 1;
pub const MAX_FLOOR: i32 = 10;
pub const N_ELEVATORS: usize = 2;
pub const STARTING_FLOOR: i32 = 1;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimulationConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub n_elevators: usize,
    pub min_floor: i32,
    pub max_floor: i32,
    pub starting_floor: i32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            n_elevators: N_ELEVATORS,
            min_floor: MIN_FLOOR,
            max_floor: MAX_FLOOR,
            starting_floor: STARTING_FLOOR,
        }
    }
}

impl SimulationConfig {
    pub fn floors(&self) -> FloorRange {
        FloorRange::new(self.min_floor, self.max_floor)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_floor > self.max_floor {
            return Err(ConfigError::InvalidFloorRange {
                min: self.min_floor,
                max: self.max_floor,
            });
        }
        if self.n_elevators == 0 {
            return Err(ConfigError::NoElevators);
        }
        if !self.floors().contains(self.starting_floor) {
            return Err(ConfigError::StartingFloorOutOfRange {
                floor: self.starting_floor,
                min: self.min_floor,
                max: self.max_floor,
            });
        }
        Ok(())
    }
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let config_str = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: Config = toml::from_str(&config_str).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    config.simulation.validate()?;
    Ok(config)
}
