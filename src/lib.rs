//! Bhaisaur - Terminal Endless Runner Library
//!
//! The runner core is UI-agnostic: hosts drive it through `runner::step` or
//! `runner::tick_runner` and render the `RunnerGame` snapshot however they like.

pub mod core;
pub mod input;
pub mod runner;
pub mod simulator;
pub mod ui;
