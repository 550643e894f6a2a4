//! Visibility-bounded cell queries.
//!
//! This is the only path by which entity data leaves the engine for an
//! untrusted viewer: each lookup passes the perception gate first and
//! substitutes [`CellData::INVALID`] for anything outside it.

mod cell;
mod surface;
mod visibility;

pub use cell::{CellData, EntityType, Occupants, get_cell_no_check};
pub use surface::{
    get_cell, get_cross_cells, get_five_cells, get_horizontal_cells, get_vertical_cells,
};
pub use visibility::{invalid_coord, invalid_coord_x, invalid_coord_y};
