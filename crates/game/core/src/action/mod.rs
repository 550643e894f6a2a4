//! Action domain - the two state transitions a player can trigger.
//!
//! # Module Structure
//!
//! - `movement`: [`Direction`] and single-tile stepping
//! - `collision`: occupancy and terrain checks for a stepped candidate
//! - `transition`: walking ([`apply_move`]) and flying ([`apply_move_flying`])
//! - `report`: derived summary of what a walking step did

pub mod collision;
pub mod movement;
pub mod report;
pub mod transition;

pub use collision::{resolve_collisions, resolve_flying};
pub use movement::Direction;
pub use report::{MoveEffects, MoveReport};
pub use transition::{MoveOutcome, apply_move, apply_move_flying};
