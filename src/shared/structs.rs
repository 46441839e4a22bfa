/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    None,
}

impl Direction {
    pub fn is_hall_direction(self) -> bool {
        self != Direction::None
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Direction::Up => write!(f, "UP"),
            Direction::Down => write!(f, "DOWN"),
            Direction::None => write!(f, "NONE"),
        }
    }
}

/// Inclusive range of floors an elevator shaft serves.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloorRange {
    pub min: i32,
    pub max: i32,
}

impl FloorRange {
    pub fn new(min: i32, max: i32) -> FloorRange {
        FloorRange { min, max }
    }

    pub fn contains(&self, floor: i32) -> bool {
        self.min <= floor && floor <= self.max
    }

    /// Never panics; an inverted range pins every floor to `max`.
    pub fn clamp(&self, floor: i32) -> i32 {
        floor.max(self.min).min(self.max)
    }
}

/**
 * Read-only snapshot of one elevator.
 *
 * `up_stops` is ascending and `down_stops` is descending, i.e. both are in
 * the order the car would serve them on its sweep.
 */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ElevatorStatus {
    pub id: usize,
    pub floor: i32,
    pub direction: Direction,
    #[serde(rename = "upStops")]
    pub up_stops: Vec<i32>,
    #[serde(rename = "downStops")]
    pub down_stops: Vec<i32>,
}

impl fmt::Display for ElevatorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Floor: {} | Dir: {} | Up Stops: {:?} | Down Stops: {:?}",
            self.id, self.floor, self.direction, self.up_stops, self.down_stops
        )
    }
}
