//! Static terrain baked into the zone.
//!
//! The obstacle table is a compile-time constant: walking movement treats
//! every listed tile as impassable, flying movement ignores it entirely.

use crate::config::ZoneConfig;
use crate::state::Coord;

/// Impassable ground tiles, sorted by row then column.
pub const OBSTACLES: [Coord; ZoneConfig::NUM_OBSTACLES] = [
    Coord::at(29, 0), Coord::at(30, 0), Coord::at(1, 1), Coord::at(2, 1),
    Coord::at(3, 1), Coord::at(29, 1), Coord::at(30, 1), Coord::at(1, 2),
    Coord::at(2, 2), Coord::at(3, 2), Coord::at(4, 2), Coord::at(15, 2),
    Coord::at(16, 2), Coord::at(17, 2), Coord::at(18, 2), Coord::at(19, 2),
    Coord::at(16, 3), Coord::at(17, 3), Coord::at(18, 3), Coord::at(19, 3),
    Coord::at(29, 4), Coord::at(30, 4), Coord::at(31, 4), Coord::at(3, 5),
    Coord::at(4, 5), Coord::at(5, 5), Coord::at(29, 5), Coord::at(3, 6),
    Coord::at(6, 6), Coord::at(9, 6), Coord::at(10, 6), Coord::at(20, 6),
    Coord::at(21, 6), Coord::at(29, 6), Coord::at(1, 7), Coord::at(2, 7),
    Coord::at(7, 7), Coord::at(9, 7), Coord::at(11, 7), Coord::at(12, 7),
    Coord::at(13, 7), Coord::at(19, 7), Coord::at(22, 7), Coord::at(23, 7),
    Coord::at(28, 7), Coord::at(0, 8), Coord::at(6, 8), Coord::at(9, 8),
    Coord::at(14, 8), Coord::at(15, 8), Coord::at(16, 8), Coord::at(17, 8),
    Coord::at(18, 8), Coord::at(24, 8), Coord::at(25, 8), Coord::at(26, 8),
    Coord::at(29, 8), Coord::at(6, 9), Coord::at(9, 9), Coord::at(26, 9),
    Coord::at(29, 9), Coord::at(3, 10), Coord::at(4, 10), Coord::at(5, 10),
    Coord::at(6, 10), Coord::at(9, 10), Coord::at(26, 10), Coord::at(29, 10),
    Coord::at(1, 11), Coord::at(2, 11), Coord::at(10, 11), Coord::at(11, 11),
    Coord::at(15, 11), Coord::at(16, 11), Coord::at(17, 11), Coord::at(26, 11),
    Coord::at(28, 11), Coord::at(0, 12), Coord::at(12, 12), Coord::at(14, 12),
    Coord::at(18, 12), Coord::at(19, 12), Coord::at(26, 12), Coord::at(29, 12),
    Coord::at(13, 13), Coord::at(14, 13), Coord::at(20, 13), Coord::at(25, 13),
    Coord::at(30, 13), Coord::at(31, 13), Coord::at(20, 14), Coord::at(24, 14),
    Coord::at(10, 15), Coord::at(11, 15), Coord::at(12, 15), Coord::at(21, 15),
    Coord::at(22, 15), Coord::at(23, 15), Coord::at(0, 16), Coord::at(8, 16),
    Coord::at(9, 16), Coord::at(13, 16), Coord::at(14, 16), Coord::at(1, 17),
    Coord::at(8, 17), Coord::at(15, 17), Coord::at(30, 17), Coord::at(31, 17),
    Coord::at(2, 18), Coord::at(7, 18), Coord::at(14, 18), Coord::at(15, 18),
    Coord::at(31, 18), Coord::at(3, 19), Coord::at(8, 19), Coord::at(9, 19),
    Coord::at(10, 19), Coord::at(11, 19), Coord::at(12, 19), Coord::at(13, 19),
    Coord::at(3, 20), Coord::at(20, 20), Coord::at(21, 20), Coord::at(22, 20),
    Coord::at(1, 21), Coord::at(2, 21), Coord::at(17, 21), Coord::at(18, 21),
    Coord::at(19, 21), Coord::at(23, 21), Coord::at(24, 21), Coord::at(25, 21),
    Coord::at(26, 21), Coord::at(0, 22), Coord::at(18, 22), Coord::at(27, 22),
    Coord::at(28, 22), Coord::at(15, 23), Coord::at(16, 23), Coord::at(19, 23),
    Coord::at(28, 23), Coord::at(12, 24), Coord::at(13, 24), Coord::at(14, 24),
    Coord::at(17, 24), Coord::at(19, 24), Coord::at(28, 24), Coord::at(9, 25),
    Coord::at(10, 25), Coord::at(11, 25), Coord::at(16, 25), Coord::at(19, 25),
    Coord::at(27, 25), Coord::at(8, 26), Coord::at(16, 26), Coord::at(18, 26),
    Coord::at(19, 26), Coord::at(27, 26), Coord::at(9, 27), Coord::at(10, 27),
    Coord::at(11, 27), Coord::at(12, 27), Coord::at(14, 27), Coord::at(15, 27),
    Coord::at(20, 27), Coord::at(25, 27), Coord::at(26, 27), Coord::at(0, 28),
    Coord::at(1, 28), Coord::at(13, 28), Coord::at(20, 28), Coord::at(21, 28),
    Coord::at(22, 28), Coord::at(23, 28), Coord::at(24, 28), Coord::at(2, 29),
    Coord::at(3, 29), Coord::at(4, 29), Coord::at(5, 29), Coord::at(6, 30),
    Coord::at(7, 30), Coord::at(8, 31), Coord::at(9, 31),
];

/// Base terrain class of a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerrainKind {
    Floor,
    Obstacle,
}

impl TerrainKind {
    pub fn is_passable(self) -> bool {
        matches!(self, TerrainKind::Floor)
    }
}

/// True if `coord` is one of the baked obstacles.
pub fn is_obstacle(coord: Coord) -> bool {
    OBSTACLES.iter().any(|&obstacle| obstacle == coord)
}

pub fn terrain_at(coord: Coord) -> TerrainKind {
    if is_obstacle(coord) {
        TerrainKind::Obstacle
    } else {
        TerrainKind::Floor
    }
}
