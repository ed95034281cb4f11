//! TaskQuest Core
//!
//! Framework-independent domain logic for the TaskQuest front end.
//! Everything with state-update rules lives here so it can be tested natively:
//! - entity: core entity trait and domain errors
//! - sim: fish tank simulation (wandering fish and food pellets)
//! - calendar: task planner and week/time-slot bucketing
//! - streak: daily visit streak record
//! - achievements: static achievement catalog, filters and stats
//! - task_tree: skill progression graph with derived availability
//! - focus_timer: focus/break countdown state machine
//! - progress: progress ring geometry and artwork lookup
//! - pet: pet fish progression (XP, levels, feeding)
//! - nav: navigation table and theme preference
//! - settings: user-adjustable settings record

mod entity;

pub mod sim;
pub mod calendar;
pub mod streak;
pub mod achievements;
pub mod task_tree;
pub mod focus_timer;
pub mod progress;
pub mod pet;
pub mod nav;
pub mod settings;

pub use entity::{decode_record, find_by_id, DomainError, DomainResult, Entity};
