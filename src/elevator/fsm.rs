/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info};
use std::fmt;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::door::Door;
use crate::elevator::passenger::Passenger;
use crate::shared::{Direction, ElevatorId, ElevatorStatus, FloorInput, PassengerId, SimError};

/**
 * A single elevator car and the state machine that drives it.
 *
 * The car advances at most one floor per call to `step`. Where it heads is
 * decided by `destination_floor`, which is either set by the dispatcher
 * (`move_to`) or derived from the stop queue of the passengers aboard.
 *
 * # Fields
 * - `id`:                  Identity, used for display and fault reports.
 * - `lowest_floor`:        Lowest reachable floor, always `<= 0`.
 * - `highest_floor`:       Highest reachable floor, always `> 0`.
 * - `current_floor`:       Where the car is. Starts at ground level (0).
 * - `destination_floor`:   Committed target, `None` while the car is free.
 * - `door`:                The car's door. The car only moves with it closed.
 * - `passengers`:          Passengers aboard, in boarding order.
 */
#[derive(Debug, Clone)]
pub struct Elevator {
    id: ElevatorId,
    lowest_floor: i32,
    highest_floor: i32,
    current_floor: i32,
    destination_floor: Option<i32>,
    door: Door,
    passengers: Vec<Passenger>,
}

impl Elevator {
    pub fn new(id: ElevatorId, lowest_floor: i32, highest_floor: i32) -> Result<Elevator, SimError> {
        validate_bounds(lowest_floor, highest_floor)?;

        Ok(Elevator {
            id,
            lowest_floor,
            highest_floor,
            current_floor: 0,
            destination_floor: None,
            door: Door::default(),
            passengers: Vec::new(),
        })
    }

    /// Builds an elevator from untyped bounds, rejecting anything that is not an integer.
    pub fn parse(id: ElevatorId, lowest_floor: &FloorInput, highest_floor: &FloorInput) -> Result<Elevator, SimError> {
        let invalid = |reason: &str| SimError::InvalidElevatorConfig {
            lowest: lowest_floor.to_string(),
            highest: highest_floor.to_string(),
            reason: reason.to_string(),
        };

        let lowest = lowest_floor.to_strict_floor().ok_or_else(|| invalid("lowest floor is not an integer"))?;
        let highest = highest_floor.to_strict_floor().ok_or_else(|| invalid("highest floor is not an integer"))?;

        Elevator::new(id, lowest, highest)
    }

    /***************************************/
    /*            Inspection               */
    /***************************************/
    pub fn id(&self) -> ElevatorId {
        self.id
    }

    pub fn lowest_floor(&self) -> i32 {
        self.lowest_floor
    }

    pub fn highest_floor(&self) -> i32 {
        self.highest_floor
    }

    pub fn current_floor(&self) -> i32 {
        self.current_floor
    }

    pub fn destination_floor(&self) -> Option<i32> {
        self.destination_floor
    }

    pub fn door(&self) -> &Door {
        &self.door
    }

    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    pub fn serves(&self, floor: i32) -> bool {
        self.lowest_floor <= floor && floor <= self.highest_floor
    }

    pub fn is_free(&self) -> bool {
        self.destination_floor.is_none()
    }

    /// Exit floors of everyone aboard, in boarding order.
    pub fn stops(&self) -> Vec<i32> {
        self.passengers
            .iter()
            .map(|passenger| passenger.destination_floor())
            .collect()
    }

    pub fn direction(&self) -> Direction {
        match self.destination_floor {
            Some(target) if target > self.current_floor => Direction::Up,
            Some(target) if target < self.current_floor => Direction::Down,
            _ => Direction::Nowhere,
        }
    }

    /**
     * The stops the car will serve on its current run.
     *
     * The earliest boarded passenger decides the side of the current floor the
     * car travels to. Only stops on that side are kept. Returns `None` when the
     * car is empty, and an empty queue when the earliest stop is this floor.
     */
    pub fn stop_queue(&self) -> Option<Vec<i32>> {
        let stops = self.stops();
        let oldest_request = *stops.first()?;

        let queue = if oldest_request > self.current_floor {
            stops.into_iter().filter(|floor| *floor > self.current_floor).collect()
        } else if oldest_request < self.current_floor {
            stops.into_iter().filter(|floor| *floor < self.current_floor).collect()
        } else {
            Vec::new()
        };

        Some(queue)
    }

    pub fn people_leaving(&self) -> Vec<&Passenger> {
        self.passengers
            .iter()
            .filter(|passenger| passenger.destination_floor() == self.current_floor)
            .collect()
    }

    pub fn status(&self) -> ElevatorStatus {
        ElevatorStatus {
            id: self.id,
            floor: self.current_floor,
            door_open: self.door.is_open(),
            direction: self.direction(),
            destination: self.destination_floor,
            passengers: self
                .passengers
                .iter()
                .map(|passenger| passenger.name().to_string())
                .collect(),
        }
    }

    /***************************************/
    /*             Commands                */
    /***************************************/
    pub fn move_to(&mut self, floor: i32) -> Result<(), SimError> {
        if !self.serves(floor) {
            return Err(self.bound_error(floor));
        }
        self.destination_floor = Some(floor);
        Ok(())
    }

    pub fn open_door(&mut self) {
        info!("{} door have opened", self);
        self.door.open();
    }

    pub fn close_door(&mut self) {
        info!("{} door have closed", self);
        self.door.close();
    }

    /// Takes a passenger aboard, opening the door first if needed.
    pub fn board(&mut self, passenger: Passenger) {
        if !self.door.is_open() {
            self.open_door();
        }
        info!("{} has entered the {} at {} floor", passenger.name(), self, self.current_floor);
        self.passengers.push(passenger);
    }

    /**
     * Lets everyone whose exit floor is the current floor off the car.
     *
     * The leaving set is collected before the passenger list is touched. Once
     * the car is empty it has nowhere left to go and becomes free.
     */
    pub fn unload_leaving(&mut self) -> Vec<Passenger> {
        let leaving: Vec<PassengerId> = self.people_leaving().iter().map(|p| p.id()).collect();
        if leaving.is_empty() {
            return Vec::new();
        }

        if !self.door.is_open() {
            self.open_door();
        }

        let mut alighted = Vec::with_capacity(leaving.len());
        for id in leaving {
            if let Some(index) = self.passengers.iter().position(|p| p.id() == id) {
                let passenger = self.passengers.remove(index);
                info!("{} has left the {} at {} floor", passenger.name(), self, self.current_floor);
                alighted.push(passenger);
            }
        }

        if self.passengers.is_empty() {
            self.destination_floor = None;
        }

        alighted
    }

    /**
     * Advances the car by one tick.
     *
     * Closes the door, retargets to the last stop of the stop queue, then
     * moves one floor towards the destination. With nowhere to go the car
     * drops its destination and becomes free.
     */
    pub fn step(&mut self) -> Result<(), SimError> {
        if self.door.is_open() {
            self.close_door();
        }

        if let Some(last_stop) = self.stop_queue().and_then(|queue| queue.last().copied()) {
            self.destination_floor = Some(last_stop);
        }

        match self.direction() {
            Direction::Up => self.up_one(),
            Direction::Down => self.down_one(),
            Direction::Nowhere => {
                self.destination_floor = None;
                debug!("{} is not moving this round", self);
                Ok(())
            }
        }
    }

    pub fn up_one(&mut self) -> Result<(), SimError> {
        self.step_by(1)
    }

    pub fn down_one(&mut self) -> Result<(), SimError> {
        self.step_by(-1)
    }

    fn step_by(&mut self, delta: i32) -> Result<(), SimError> {
        if self.door.is_open() {
            return Err(SimError::DoorObstruction { elevator: self.id });
        }

        let next_floor = match self.current_floor.checked_add(delta) {
            Some(floor) if self.serves(floor) => floor,
            _ => return Err(self.bound_error(self.current_floor.saturating_add(delta))),
        };

        debug!("{} moved floors {} -> {}", self, self.current_floor, next_floor);
        self.current_floor = next_floor;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn test_set_destination(&mut self, floor: Option<i32>) {
        self.destination_floor = floor;
    }

    fn bound_error(&self, floor: i32) -> SimError {
        SimError::FloorBound {
            elevator: self.id,
            floor,
            lowest: self.lowest_floor,
            highest: self.highest_floor,
        }
    }
}

impl fmt::Display for Elevator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Elevator nr.{}", self.id)
    }
}

fn validate_bounds(lowest_floor: i32, highest_floor: i32) -> Result<(), SimError> {
    let reason = if lowest_floor > 0 {
        "lowest floor must be at or below ground level"
    } else if highest_floor <= 0 {
        "highest floor must be above ground level"
    } else if lowest_floor >= highest_floor {
        "lowest floor must be below highest floor"
    } else {
        return Ok(());
    };

    Err(SimError::InvalidElevatorConfig {
        lowest: lowest_floor.to_string(),
        highest: highest_floor.to_string(),
        reason: reason.to_string(),
    })
}
