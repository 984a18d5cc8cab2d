pub mod error;
pub mod macros;
pub mod structs;

pub use error::ElevatorFault;
pub use error::SimError;
pub use structs::Direction;
pub use structs::ElevatorId;
pub use structs::ElevatorStatus;
pub use structs::FloorInput;
pub use structs::IdAllocator;
pub use structs::PassengerId;
pub use structs::SimulationStatus;
pub use structs::TickReport;
