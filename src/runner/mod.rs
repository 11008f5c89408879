//! Endless runner game.
//!
//! A real-time action game where the player jumps scrolling obstacles.
//! Gravity pulls the runner down each frame, the scroll speed creeps up,
//! and touching an obstacle ends the run.

pub mod collision;
pub mod kinematics;
pub mod logic;
pub mod spawner;
pub mod types;

pub use logic::*;
pub use types::*;
