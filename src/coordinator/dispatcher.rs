/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info, warn};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::SimulationConfig;
use crate::elevator::Elevator;
use crate::shared::{Direction, DispatchError, ElevatorStatus};

/***************************************/
/*          Scoring weights            */
/***************************************/
const DISTANCE_COST: i64 = 100;
const IDLE_BONUS: i64 = 50;
const EN_ROUTE_BONUS: i64 = 10;
const BEHIND_PENALTY: i64 = 500;
const OPPOSITE_PENALTY: i64 = 1000;

/**
 * Assigns hall calls to the fleet and routes cab calls.
 *
 * The dispatcher owns every elevator; fleet order is creation order and ids
 * are 1-based positions in it. Hall calls are scored greedily against the
 * current state of each car and handed to the cheapest one. Nothing is queued
 * at this level.
 */
#[derive(Debug, Clone)]
pub struct Dispatcher {
    elevators: Vec<Elevator>,
}

impl Dispatcher {
    pub fn new(elevators: Vec<Elevator>) -> Result<Dispatcher, DispatchError> {
        if elevators.is_empty() {
            return Err(DispatchError::EmptyFleet);
        }
        Ok(Dispatcher { elevators })
    }

    pub fn from_config(config: &SimulationConfig) -> Result<Dispatcher, DispatchError> {
        if config.min_floor > config.max_floor {
            return Err(DispatchError::InvalidFloorRange {
                min: config.min_floor,
                max: config.max_floor,
            });
        }
        let floors = config.floors();
        let elevators = (1..=config.n_elevators)
            .map(|id| Elevator::new(id, config.starting_floor, floors))
            .collect();
        Dispatcher::new(elevators)
    }

    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    /// Hands a hall call to the lowest scoring elevator and returns its id.
    pub fn submit_external_request(&mut self, floor: i32, direction: Direction) -> Result<usize, DispatchError> {
        if !direction.is_hall_direction() {
            return Err(DispatchError::MissingDirection(floor));
        }
        info!("New request: floor {}, direction {}", floor, direction);

        // Later cars must be strictly cheaper to win, so ties go to fleet order
        let mut best: Option<(usize, i64)> = None;
        for (index, elevator) in self.elevators.iter().enumerate() {
            let score = score(elevator, floor, direction);
            debug!("Elevator {} scored {} for floor {} {}", elevator.id(), score, floor, direction);
            match best {
                Some((_, min_score)) if score >= min_score => (),
                _ => best = Some((index, score)),
            }
        }

        let (index, _) = best.ok_or(DispatchError::EmptyFleet)?;
        let elevator = &mut self.elevators[index];
        info!("Assigning floor {} {} to elevator {}", floor, direction, elevator.id());
        elevator.add_stop_request(floor);
        Ok(elevator.id())
    }

    pub fn submit_internal_request(&mut self, elevator_id: usize, destination_floor: i32) -> Result<(), DispatchError> {
        let elevator = match self.elevator_mut(elevator_id) {
            Some(elevator) => elevator,
            None => {
                warn!("Internal request for unknown elevator {}", elevator_id);
                return Err(DispatchError::UnknownElevator(elevator_id));
            }
        };
        info!("Internal request for elevator {} to floor {}", elevator_id, destination_floor);
        elevator.add_stop_request(destination_floor);
        Ok(())
    }

    pub fn advance_all(&mut self) {
        debug!("One step simulated");
        for elevator in self.elevators.iter_mut() {
            elevator.step();
        }
    }

    pub fn statuses(&self) -> Vec<ElevatorStatus> {
        self.elevators.iter().map(Elevator::status).collect()
    }

    fn elevator_mut(&mut self, elevator_id: usize) -> Option<&mut Elevator> {
        elevator_id.checked_sub(1).and_then(|index| self.elevators.get_mut(index))
    }
}

/// Cost of sending `elevator` to a hall call. Lower is better.
pub fn score(elevator: &Elevator, floor: i32, direction: Direction) -> i64 {
    let current_floor = elevator.current_floor();
    let mut score = DISTANCE_COST * (i64::from(current_floor) - i64::from(floor)).abs();

    let current_direction = elevator.current_direction();
    if current_direction == Direction::None {
        score -= IDLE_BONUS;
    } else if current_direction == direction {
        let ahead = match direction {
            Direction::Up => floor > current_floor,
            Direction::Down => floor < current_floor,
            Direction::None => false,
        };
        if ahead {
            score -= EN_ROUTE_BONUS;
        } else {
            score += BEHIND_PENALTY;
        }
    } else {
        score += OPPOSITE_PENALTY;
    }

    score
}
