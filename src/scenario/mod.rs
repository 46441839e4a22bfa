/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::coordinator::DispatchHandle;
use crate::shared::{ConfigError, Direction, DispatchError, ElevatorStatus};


/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Action {
    External { floor: i32, direction: Direction },
    Internal { elevator: usize, floor: i32 },
    Step,
    Status,
}

/// A scripted sequence of requests and ticks, replayed against a running dispatcher.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Scenario {
    #[serde(default)]
    pub actions: Vec<Action>,
}

impl Scenario {
    pub fn load(path: impl AsRef<Path>) -> Result<Scenario, ConfigError> {
        let path = path.as_ref();
        let scenario_str = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&scenario_str).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The two-car demo: a pair of hall calls, a down call from the top, then cab calls.
    pub fn default_script() -> Scenario {
        use Action::*;

        Scenario {
            actions: vec![
                Status,
                External { floor: 5, direction: Direction::Up },
                External { floor: 2, direction: Direction::Up },
                Step,
                External { floor: 10, direction: Direction::Down },
                Step,
                Step,
                Internal { elevator: 1, floor: 8 },
                Step,
                Step,
                Step,
                Internal { elevator: 2, floor: 1 },
                Step,
                Step,
                Step,
                Status,
            ],
        }
    }

    /// Replays every action and returns one fleet snapshot per `Status` action.
    pub fn play(&self, handle: &DispatchHandle) -> Result<Vec<Vec<ElevatorStatus>>, DispatchError> {
        let mut snapshots = Vec::new();
        for action in &self.actions {
            match *action {
                Action::External { floor, direction } => {
                    let assigned = handle.submit_external_request(floor, direction)?;
                    info!("Hall call at floor {} {} went to elevator {}", floor, direction, assigned);
                }
                Action::Internal { elevator, floor } => handle.submit_internal_request(elevator, floor)?,
                Action::Step => handle.advance_all()?,
                Action::Status => snapshots.push(handle.statuses()?),
            }
        }
        Ok(snapshots)
    }
}
