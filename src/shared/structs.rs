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
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Up,
    Down,
    Nowhere,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Direction::Up => write!(f, "UP"),
            Direction::Down => write!(f, "DOWN"),
            Direction::Nowhere => write!(f, "NOWHERE"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct ElevatorId(pub u32);

impl fmt::Display for ElevatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct PassengerId(pub u32);

impl fmt::Display for PassengerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/**
 * Hands out sequential identities, starting at 1.
 *
 * Each simulation owns its own allocators so independent simulations never
 * share a counter.
 */
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    issued: u32,
}

impl IdAllocator {
    pub fn new() -> IdAllocator {
        IdAllocator { issued: 0 }
    }

    pub fn next_id(&mut self) -> u32 {
        self.issued += 1;
        self.issued
    }

    /// The id `next_id` will hand out, without consuming it.
    pub fn peek(&self) -> u32 {
        self.issued + 1
    }
}

/**
 * A floor value as it arrives from the outside world (config file or REPL).
 *
 * Passenger floors accept integers and numeric strings. Elevator bounds only
 * accept integers. Everything else is rejected by the typed constructors.
 */
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum FloorInput {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl FloorInput {
    pub fn to_floor(&self) -> Option<i32> {
        match self {
            FloorInput::Integer(value) => i32::try_from(*value).ok(),
            FloorInput::Float(_) => None,
            FloorInput::Text(text) => text.trim().parse::<i32>().ok(),
        }
    }

    /// Like `to_floor`, but numeric strings are rejected too.
    pub fn to_strict_floor(&self) -> Option<i32> {
        match self {
            FloorInput::Integer(value) => i32::try_from(*value).ok(),
            _ => None,
        }
    }
}

impl From<i32> for FloorInput {
    fn from(floor: i32) -> Self {
        FloorInput::Integer(floor as i64)
    }
}

impl From<&str> for FloorInput {
    fn from(text: &str) -> Self {
        FloorInput::Text(text.to_string())
    }
}

impl fmt::Display for FloorInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FloorInput::Integer(value) => write!(f, "{}", value),
            FloorInput::Float(value) => write!(f, "{}", value),
            FloorInput::Text(text) => write!(f, "{:?}", text),
        }
    }
}

/***************************************/
/*          Status reporting           */
/***************************************/
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ElevatorStatus {
    pub id: ElevatorId,
    pub floor: i32,
    pub door_open: bool,
    pub direction: Direction,
    pub destination: Option<i32>,
    pub passengers: Vec<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SimulationStatus {
    pub tick: u64,
    pub elevators: Vec<ElevatorStatus>,
    pub waiting: Vec<String>,
}

impl fmt::Display for SimulationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tick {}", self.tick)?;
        for elevator in self.elevators.iter() {
            writeln!(f, "Elevator nr.{} is at {} floor.", elevator.id, elevator.floor)?;
            writeln!(f, "Elevator nr.{}'s door are open: {}", elevator.id, elevator.door_open)?;
            writeln!(f, "Elevator nr.{} is going: {}", elevator.id, elevator.direction)?;
            writeln!(f, "People in the Elevator nr.{}: {:?}", elevator.id, elevator.passengers)?;
        }
        write!(f, "People waiting for a lift {:?}", self.waiting)
    }
}

/// What happened during one call to `Simulation::next_tick`.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub tick: u64,
    pub alighted: Vec<(String, ElevatorId)>,
    pub boarded: Vec<(String, ElevatorId)>,
    pub dispatched: Vec<(String, ElevatorId)>,
    pub unserved: Vec<String>,
}
