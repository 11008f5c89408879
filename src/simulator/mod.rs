//! Headless runner simulator.
//!
//! Plays many sessions with a simple autopilot to check how the tuning of
//! each revision feels: how long runs last, how often pairs and air
//! obstacles show up, and where scores land.
//!
//! The simulator drives the same `runner::step` the terminal game uses, so
//! results match real gameplay.

mod autopilot;
mod config;
mod report;
mod runner;

pub use autopilot::should_jump;
pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
