/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info};
use std::collections::BTreeSet;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Direction, ElevatorStatus, FloorRange};

/**
 * Motion state machine for a single elevator car.
 *
 * Each call to `step` is one tick of simulated time: the car either serves the
 * stop at its current floor or moves one floor in its current direction. The
 * car keeps sweeping in one direction while there is work ahead, then reverses,
 * and goes idle once both stop-sets are empty.
 *
 * # Fields
 * - `id`:                  1-based identifier, fixed at creation.
 * - `floors`:              Floors served by the shaft. `current_floor` never leaves this range.
 * - `current_floor`:       Floor the car is at.
 * - `current_direction`:   `Up`, `Down`, or `None` when idle.
 * - `up_stops`:            Stops requested at or above the car when they were added.
 * - `down_stops`:          Stops requested below the car when they were added.
 *
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Elevator {
    id: usize,
    floors: FloorRange,
    current_floor: i32,
    current_direction: Direction,
    up_stops: BTreeSet<i32>,
    down_stops: BTreeSet<i32>,
}

impl Elevator {
    pub fn new(id: usize, starting_floor: i32, floors: FloorRange) -> Elevator {
        Elevator {
            id,
            floors,
            current_floor: floors.clamp(starting_floor),
            current_direction: Direction::None,
            up_stops: BTreeSet::new(),
            down_stops: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn current_floor(&self) -> i32 {
        self.current_floor
    }

    pub fn current_direction(&self) -> Direction {
        self.current_direction
    }

    pub fn is_idle(&self) -> bool {
        self.current_direction == Direction::None
    }

    pub fn has_stop(&self, floor: i32) -> bool {
        self.up_stops.contains(&floor) || self.down_stops.contains(&floor)
    }

    /// Adds a stop. Floors outside the shaft are dropped without error.
    pub fn add_stop_request(&mut self, floor: i32) {
        if !self.floors.contains(floor) {
            debug!(
                "Elevator {} ignoring stop at floor {} outside [{}, {}]",
                self.id, floor, self.floors.min, self.floors.max
            );
            return;
        }

        // The sweep a stop belongs to is fixed here and never revisited
        if floor >= self.current_floor {
            self.up_stops.insert(floor);
        } else {
            self.down_stops.insert(floor);
        }

        if self.is_idle() {
            self.determine_new_direction();
        }
    }

    pub fn step(&mut self) {
        let floor = self.current_floor;

        // Arrival and departure share one tick
        if self.has_stop(floor) {
            info!("Elevator {} stopping at floor {}", self.id, floor);
            self.up_stops.remove(&floor);
            self.down_stops.remove(&floor);
            self.determine_new_direction();
            return;
        }

        match self.current_direction {
            Direction::Up => self.current_floor += 1,
            Direction::Down => self.current_floor -= 1,
            Direction::None => (),
        }

        if !self.floors.contains(self.current_floor) {
            self.current_floor = self.floors.clamp(self.current_floor);
            self.determine_new_direction();
        }

        if self.current_floor != floor {
            debug!("Elevator {} moved {} to floor {}", self.id, self.current_direction, self.current_floor);
        }

        if self.is_idle() {
            self.determine_new_direction();
        }
    }

    pub fn status(&self) -> ElevatorStatus {
        ElevatorStatus {
            id: self.id,
            floor: self.current_floor,
            direction: self.current_direction,
            up_stops: self.up_stops.iter().copied().collect(),
            down_stops: self.down_stops.iter().rev().copied().collect(),
        }
    }

    fn determine_new_direction(&mut self) {
        let next_direction = self.choose_direction();
        if next_direction != self.current_direction {
            debug!(
                "Elevator {} at floor {} changing direction {} -> {}",
                self.id, self.current_floor, self.current_direction, next_direction
            );
            self.current_direction = next_direction;
        }
    }

    fn choose_direction(&self) -> Direction {
        // Continue in current direction of travel if there is work left ahead
        match self.current_direction {
            Direction::Up if self.up_stops.range(self.current_floor..).next().is_some() => {
                return Direction::Up;
            }
            Direction::Down if self.down_stops.range(..=self.current_floor).next().is_some() => {
                return Direction::Down;
            }
            _ => (),
        }

        if !self.up_stops.is_empty() {
            Direction::Up
        } else if !self.down_stops.is_empty() {
            Direction::Down
        } else {
            Direction::None
        }
    }
}
