//! Fish Tank Simulation
//!
//! Decorative overlay simulation: a handful of fish steering toward wandering
//! targets, plus food pellets that drift down and fade out.
//! One `Tank::step` is expected per display frame.

mod geometry;
mod config;
mod fish;
mod pellet;
mod tank;

pub use geometry::{Bounds, Vec2};
pub use config::{PelletConfig, SimConfig};
pub use fish::{normalize_angle, Fish, FishStep, FishTransform, FISH_COLORS};
pub use pellet::{opacity_at, Pellet};
pub use tank::Tank;
