//! Combat resolution system.
//!
//! This module provides pure functions for resolving a player walking into a
//! living monster. All combat logic is deterministic and side-effect free.
//!
//! # Core Functions
//!
//! - `resolve_encounter`: Simultaneous exchange computed from both sides' pre-encounter stats
//! - `apply_damage`: HP reduction (clamped to 0)

pub mod damage;
pub mod result;

pub use damage::apply_damage;
pub use result::{Encounter, resolve_encounter};
