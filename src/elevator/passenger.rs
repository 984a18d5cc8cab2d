/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Serialize;
use std::fmt;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{FloorInput, PassengerId, SimError};

/**
 * A request for a ride from `origin_floor` to `destination_floor`.
 *
 * Immutable once built. The id only identifies the passenger for display and
 * for removing exactly this passenger from a list.
 */
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Passenger {
    id: PassengerId,
    name: String,
    origin_floor: i32,
    destination_floor: i32,
}

impl Passenger {
    pub fn new(id: PassengerId, name: &str, origin_floor: i32, destination_floor: i32) -> Passenger {
        Passenger {
            id,
            name: name.to_string(),
            origin_floor,
            destination_floor,
        }
    }

    /// Builds a passenger from untyped floor values, e.g. `"0"` or `-1`.
    pub fn parse(
        id: PassengerId,
        name: &str,
        origin_floor: &FloorInput,
        destination_floor: &FloorInput,
    ) -> Result<Passenger, SimError> {
        let origin = origin_floor.to_floor().ok_or_else(|| SimError::InvalidPassenger {
            name: name.to_string(),
            field: "origin floor",
            value: origin_floor.to_string(),
        })?;
        let destination = destination_floor.to_floor().ok_or_else(|| SimError::InvalidPassenger {
            name: name.to_string(),
            field: "destination floor",
            value: destination_floor.to_string(),
        })?;

        Ok(Passenger::new(id, name, origin, destination))
    }

    pub fn id(&self) -> PassengerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn origin_floor(&self) -> i32 {
        self.origin_floor
    }

    pub fn destination_floor(&self) -> i32 {
        self.destination_floor
    }
}

impl fmt::Display for Passenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Passenger id:{} -> ({}, {}, {})>",
            self.id, self.name, self.origin_floor, self.destination_floor
        )
    }
}
