//! Event types for different topics.

use serde::{Deserialize, Serialize};
use zone_core::{Coord, MoveEffects};

use crate::api::PlayerId;

/// Events related to player movement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovementEvent {
    /// A walking step was resolved. Blocked steps and fights are reported too,
    /// with `from == to`.
    PlayerMoved {
        player: PlayerId,
        from: Coord,
        to: Coord,
        effects: MoveEffects,
    },

    /// A flying step was resolved.
    PlayerFlew {
        player: PlayerId,
        from: Coord,
        to: Coord,
    },
}

/// Events related to cell queries.
///
/// Carries only counts; the cell contents go to the querying player alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryEvent {
    CellsQueried {
        player: PlayerId,
        count: usize,
        invalid: usize,
    },
}
