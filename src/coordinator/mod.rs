pub mod dispatcher;
pub mod simulation;

pub use dispatcher::Dispatcher;
pub use simulation::Simulation;
