//! Deterministic state-transition engine for the 32×32 zone.
//!
//! `zone-core` defines the canonical rules of the zone: directional movement
//! with collision, item pickup, simultaneous monster combat, the flying
//! variant that ignores terrain, and the visibility-gated cell queries that
//! are the only way entity data leaves the engine.
//!
//! Every collection is a fixed-capacity array sized by [`ZoneConfig`] and
//! every operation is a pure, total function of its inputs. Blocked or
//! illegal moves are defined outcomes (no movement), never errors.
#![cfg_attr(not(feature = "std"), no_std)]

pub mod action;
pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod query;
pub mod state;

pub use action::{
    Direction, MoveEffects, MoveOutcome, MoveReport, apply_move, apply_move_flying,
    resolve_collisions, resolve_flying,
};
pub use combat::{Encounter, resolve_encounter};
pub use config::{ViewConfig, ViewConfigError, ZoneConfig};
pub use env::{OBSTACLES, TerrainKind, is_obstacle, terrain_at};
pub use error::{ErrorSeverity, GameError};
pub use query::{
    CellData, EntityType, Occupants, get_cell, get_cell_no_check, get_cross_cells, get_five_cells,
    get_horizontal_cells, get_vertical_cells, invalid_coord, invalid_coord_x, invalid_coord_y,
};
#[cfg(feature = "serde")]
pub use state::compute_state_root;
pub use state::{
    Coord, CoordError, InitializationError, ItemData, ItemWithId, MonsterData, MonsterWithId,
    PlayerData, PlayerWithId, Roster, ZoneState,
};
