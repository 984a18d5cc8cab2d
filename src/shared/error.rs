/***************************************/
/*        3rd party libraries          */
/***************************************/
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::structs::ElevatorId;

/***************************************/
/*               Errors                */
/***************************************/
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error("Invalid elevator configuration ({lowest}, {highest}): {reason}")]
    InvalidElevatorConfig {
        lowest: String,
        highest: String,
        reason: String,
    },

    #[error("Invalid passenger {name:?}: {field} {value} is not an integer floor")]
    InvalidPassenger {
        name: String,
        field: &'static str,
        value: String,
    },

    #[error("Cannot move Elevator nr.{elevator} while the door is open")]
    DoorObstruction { elevator: ElevatorId },

    #[error("Elevator nr.{elevator} cannot reach floor {floor}, bounds are [{lowest}, {highest}]")]
    FloorBound {
        elevator: ElevatorId,
        floor: i32,
        lowest: i32,
        highest: i32,
    },

    #[error("No elevators in this controller")]
    NoElevators,

    #[error("{} elevator(s) failed to move this tick", .faults.len())]
    TickFailed { faults: Vec<ElevatorFault> },
}

/// A movement failure of a single elevator, collected during a dispatcher tick.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("Elevator nr.{elevator}: {source}")]
pub struct ElevatorFault {
    pub elevator: ElevatorId,
    #[source]
    pub source: Box<SimError>,
}
