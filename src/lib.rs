//! Tick-driven simulation of a small bank of elevators.
//!
//! - `elevator`:       Door, Passenger and the per-car state machine.
//! - `coordinator`:    Dispatcher (car assignment) and Simulation (per-tick ordering).
//! - `config`:         Scenario and runtime configuration read from `config.toml`.
//! - `shared`:         Ids, Direction, status reports and the error types.
//!
//! Everything here is single threaded. Callers drive the simulation by calling
//! `Simulation::next_tick` and read its state through `Simulation::status`.

pub mod config;
pub mod coordinator;
pub mod elevator;
pub mod shared;

pub use coordinator::{Dispatcher, Simulation};
pub use elevator::{Door, Elevator, Passenger};
pub use shared::{Direction, SimError};
