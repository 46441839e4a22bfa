/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the dispatcher and the dispatch thread.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("the fleet must contain at least one elevator")]
    EmptyFleet,

    #[error("invalid floor range: min floor {min} is above max floor {max}")]
    InvalidFloorRange { min: i32, max: i32 },

    #[error("elevator {0} not found")]
    UnknownElevator(usize),

    #[error("hall call at floor {0} must be tagged up or down")]
    MissingDirection(i32),

    #[error("dispatch thread is not running")]
    Disconnected,
}

/// Errors raised while loading `config.toml` or a scenario file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid floor range: min_floor {min} is above max_floor {max}")]
    InvalidFloorRange { min: i32, max: i32 },

    #[error("n_elevators must be at least 1")]
    NoElevators,

    #[error("starting floor {floor} is outside [{min}, {max}]")]
    StartingFloorOutOfRange { floor: i32, min: i32, max: i32 },
}
