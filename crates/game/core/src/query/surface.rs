//! Gated query entry points.
//!
//! Every function here runs the visibility gate before touching entity
//! data. Batch variants evaluate each of their five cells independently;
//! a derived coordinate that falls off the board is reported as Invalid.

use crate::config::{ViewConfig, ZoneConfig};
use crate::query::cell::{CellData, Occupants, get_cell_no_check};
use crate::query::visibility::invalid_coord;
use crate::state::Coord;

const BATCH: usize = ZoneConfig::QUERY_BATCH;

/// Offsets along one axis, centred on the anchor.
const LINE: [i8; BATCH] = [-2, -1, 0, 1, 2];

pub fn get_cell(view: ViewConfig, player: Coord, query: Coord, occupants: &Occupants) -> CellData {
    if invalid_coord(view, player, query) {
        return CellData::INVALID;
    }
    get_cell_no_check(query, occupants)
}

fn get_derived_cell(
    view: ViewConfig,
    player: Coord,
    query: Option<Coord>,
    occupants: &Occupants,
) -> CellData {
    match query {
        Some(query) => get_cell(view, player, query, occupants),
        None => CellData::INVALID,
    }
}

pub fn get_five_cells(
    view: ViewConfig,
    player: Coord,
    queries: [Coord; BATCH],
    occupants: &Occupants,
) -> [CellData; BATCH] {
    queries.map(|query| get_cell(view, player, query, occupants))
}

/// The player's own tile followed by its neighbours below, above, right and left.
pub fn get_cross_cells(view: ViewConfig, player: Coord, occupants: &Occupants) -> [CellData; BATCH] {
    let pattern = [(0, 0), (0, 1), (0, -1), (1, 0), (-1, 0)];
    pattern.map(|(dx, dy)| get_derived_cell(view, player, player.offset(dx, dy), occupants))
}

/// Five cells of the column through `anchor`, top to bottom.
///
/// The anchor must share the player's row and pass the gate, otherwise the
/// whole batch is Invalid.
pub fn get_vertical_cells(
    view: ViewConfig,
    player: Coord,
    anchor: Coord,
    occupants: &Occupants,
) -> [CellData; BATCH] {
    if anchor.y() != player.y() || invalid_coord(view, player, anchor) {
        return [CellData::INVALID; BATCH];
    }
    LINE.map(|dy| get_derived_cell(view, player, anchor.offset(0, dy), occupants))
}

/// Five cells of the row through `anchor`, left to right.
///
/// The anchor must share the player's column and pass the gate, otherwise
/// the whole batch is Invalid.
pub fn get_horizontal_cells(
    view: ViewConfig,
    player: Coord,
    anchor: Coord,
    occupants: &Occupants,
) -> [CellData; BATCH] {
    if anchor.x() != player.x() || invalid_coord(view, player, anchor) {
        return [CellData::INVALID; BATCH];
    }
    LINE.map(|dx| get_derived_cell(view, player, anchor.offset(dx, 0), occupants))
}
