pub mod door;
pub mod fsm;
pub mod passenger;
mod fsm_tests;

pub use door::Door;
pub use fsm::Elevator;
pub use passenger::Passenger;
