//! Read-only world data.
//!
//! The zone's static layout is fixed at compile time; nothing here is part
//! of the mutable state or ever changes between snapshots.
mod map;

pub use map::{OBSTACLES, TerrainKind, is_obstacle, terrain_at};
