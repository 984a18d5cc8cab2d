/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::ScenarioConfig;
use crate::coordinator::dispatcher::Dispatcher;
use crate::elevator::{Elevator, Passenger};
use crate::shared::{
    ElevatorId, FloorInput, IdAllocator, PassengerId, SimError, SimulationStatus, TickReport,
};

/**
 * One running simulation: a dispatcher, the passengers still waiting for a
 * car, and the id allocators for both.
 *
 * Every passenger is at all times either in `waiting` or aboard exactly one
 * elevator. `next_tick` is the only place passengers move between the two.
 */
#[derive(Debug, Clone)]
pub struct Simulation {
    description: String,
    dispatcher: Dispatcher,
    waiting: Vec<Passenger>,
    elevator_ids: IdAllocator,
    passenger_ids: IdAllocator,
    tick: u64,
}

impl Simulation {
    pub fn new(description: &str) -> Simulation {
        Simulation {
            description: description.to_string(),
            dispatcher: Dispatcher::new(),
            waiting: Vec::new(),
            elevator_ids: IdAllocator::new(),
            passenger_ids: IdAllocator::new(),
            tick: 0,
        }
    }

    pub fn from_scenario(scenario: &ScenarioConfig) -> Result<Simulation, SimError> {
        let mut simulation = Simulation::new(&scenario.description);

        for elevator in scenario.elevators.iter() {
            simulation.add_elevator(&elevator.lowest_floor, &elevator.highest_floor)?;
        }
        for passenger in scenario.passengers.iter() {
            simulation.add_passenger(&passenger.name, &passenger.origin_floor, &passenger.destination_floor)?;
        }

        Ok(simulation)
    }

    /***************************************/
    /*            Inspection               */
    /***************************************/
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn waiting(&self) -> &[Passenger] {
        &self.waiting
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Nobody is waiting and every car is empty.
    pub fn is_finished(&self) -> bool {
        self.waiting.is_empty()
            && self
                .dispatcher
                .elevators()
                .iter()
                .all(|elevator| elevator.passengers().is_empty())
    }

    pub fn status(&self) -> SimulationStatus {
        SimulationStatus {
            tick: self.tick,
            elevators: self
                .dispatcher
                .elevators()
                .iter()
                .map(|elevator| elevator.status())
                .collect(),
            waiting: self
                .waiting
                .iter()
                .map(|passenger| passenger.name().to_string())
                .collect(),
        }
    }

    /***************************************/
    /*             Commands                */
    /***************************************/
    pub fn add_elevator(&mut self, lowest_floor: &FloorInput, highest_floor: &FloorInput) -> Result<ElevatorId, SimError> {
        let elevator = Elevator::parse(ElevatorId(self.elevator_ids.peek()), lowest_floor, highest_floor)?;
        self.elevator_ids.next_id();

        let id = elevator.id();
        self.dispatcher.add_elevator(elevator);
        Ok(id)
    }

    pub fn add_passenger(
        &mut self,
        name: &str,
        origin_floor: &FloorInput,
        destination_floor: &FloorInput,
    ) -> Result<PassengerId, SimError> {
        let passenger = Passenger::parse(PassengerId(self.passenger_ids.peek()), name, origin_floor, destination_floor)?;
        self.passenger_ids.next_id();

        info!("{} is waiting for a lift", passenger);
        let id = passenger.id();
        self.waiting.push(passenger);
        Ok(id)
    }

    /**
     * Runs one tick of the simulation.
     *
     * The order is fixed:
     * 1. Passengers at their exit floor leave their car.
     * 2. Waiting passengers board a capable car standing at their floor.
     * 3. Anyone still waiting gets the nearest free car sent to them.
     * 4. Every car moves one step.
     *
     * A movement failure of any car is returned after all cars have moved.
     */
    pub fn next_tick(&mut self) -> Result<TickReport, SimError> {
        self.tick += 1;
        debug!("Tick {} of '{}'", self.tick, self.description);

        let mut report = TickReport {
            tick: self.tick,
            ..TickReport::default()
        };

        // Passengers leaving at the current floors
        for elevator in self.dispatcher.elevators_mut() {
            let elevator_id = elevator.id();
            for passenger in elevator.unload_leaving() {
                report.alighted.push((passenger.name().to_string(), elevator_id));
            }
        }

        // Waiting passengers entering a car at their floor
        let boarding: Vec<(PassengerId, usize)> = self
            .waiting
            .iter()
            .filter_map(|passenger| {
                self.dispatcher
                    .boarding_index(passenger)
                    .map(|index| (passenger.id(), index))
            })
            .collect();

        for (passenger_id, index) in boarding {
            let Some(elevator) = self.dispatcher.elevators_mut().get_mut(index) else {
                continue;
            };
            if let Some(index) = self.waiting.iter().position(|p| p.id() == passenger_id) {
                let passenger = self.waiting.remove(index);
                report.boarded.push((passenger.name().to_string(), elevator.id()));
                elevator.board(passenger);
            }
        }

        // Calling a car for everyone still waiting
        for passenger in self.waiting.iter() {
            match self.dispatcher.assign_elevator(passenger)? {
                Some(elevator_id) => report.dispatched.push((passenger.name().to_string(), elevator_id)),
                None => {
                    info!("No elevator for {} at the moment", passenger.name());
                    report.unserved.push(passenger.name().to_string());
                }
            }
        }

        self.dispatcher.tick()?;
        Ok(report)
    }
}
