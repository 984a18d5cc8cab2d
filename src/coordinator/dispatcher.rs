/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{info, warn};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::{Elevator, Passenger};
use crate::shared::{ElevatorFault, ElevatorId, SimError};

/**
 * Owns the elevators of one building and decides which car serves whom.
 *
 * Elevators are kept in insertion order. That order is the tie-break for
 * every search the dispatcher does.
 */
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    elevators: Vec<Elevator>,
}

impl Dispatcher {
    pub fn new() -> Dispatcher {
        Dispatcher { elevators: Vec::new() }
    }

    pub fn add_elevator(&mut self, elevator: Elevator) {
        info!("{} added, serving floors {} to {}", elevator, elevator.lowest_floor(), elevator.highest_floor());
        self.elevators.push(elevator);
    }

    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    pub fn elevator_mut(&mut self, id: ElevatorId) -> Option<&mut Elevator> {
        self.elevators.iter_mut().find(|elevator| elevator.id() == id)
    }

    pub(crate) fn elevators_mut(&mut self) -> &mut [Elevator] {
        &mut self.elevators
    }

    /// Elevators without a committed destination. Fails if no elevator was ever added.
    pub fn free_elevators(&self) -> Result<Vec<&Elevator>, SimError> {
        if self.elevators.is_empty() {
            return Err(SimError::NoElevators);
        }
        Ok(self.elevators.iter().filter(|elevator| elevator.is_free()).collect())
    }

    /// The first car standing at the passenger's floor that can also reach their destination.
    pub fn elevator_for_boarding(&self, passenger: &Passenger) -> Option<ElevatorId> {
        self.boarding_index(passenger).map(|index| self.elevators[index].id())
    }

    /// Position of the car `elevator_for_boarding` picks, so callers can reach that exact car.
    pub(crate) fn boarding_index(&self, passenger: &Passenger) -> Option<usize> {
        self.elevators.iter().position(|elevator| {
            elevator.current_floor() == passenger.origin_floor() && elevator.serves(passenger.destination_floor())
        })
    }

    /**
     * Sends the nearest free, capable elevator to the passenger's floor.
     *
     * Candidates must serve both the origin and the destination. The distance
     * is `|origin - current floor|`; on a tie the earlier elevator wins.
     * Returns `Ok(None)` when no candidate exists and the passenger has to
     * keep waiting.
     */
    pub fn assign_elevator(&mut self, passenger: &Passenger) -> Result<Option<ElevatorId>, SimError> {
        if self.elevators.is_empty() {
            return Err(SimError::NoElevators);
        }

        let origin = passenger.origin_floor();
        let mut best: Option<(usize, u32)> = None;

        for (index, elevator) in self.elevators.iter().enumerate() {
            if !elevator.is_free() || !elevator.serves(origin) || !elevator.serves(passenger.destination_floor()) {
                continue;
            }
            let distance = origin.abs_diff(elevator.current_floor());
            if best.map_or(true, |(_, min_distance)| distance < min_distance) {
                best = Some((index, distance));
            }
        }

        let Some((index, _)) = best else {
            return Ok(None);
        };

        let elevator = &mut self.elevators[index];
        elevator.move_to(origin)?;
        info!("An {} for {} is on its way!", elevator, passenger.name());
        Ok(Some(elevator.id()))
    }

    /**
     * Steps every elevator once, in order.
     *
     * A failing elevator never stops the others from moving. Failures are
     * collected and returned together once all elevators have been stepped.
     */
    pub fn tick(&mut self) -> Result<(), SimError> {
        let mut faults = Vec::new();

        for elevator in self.elevators.iter_mut() {
            if let Err(e) = elevator.step() {
                warn!("{} failed to move: {}", elevator, e);
                faults.push(ElevatorFault {
                    elevator: elevator.id(),
                    source: Box::new(e),
                });
            }
        }

        if faults.is_empty() {
            Ok(())
        } else {
            Err(SimError::TickFailed { faults })
        }
    }
}
