use arrayvec::ArrayVec;
use bitflags::bitflags;

use crate::config::ZoneConfig;
use crate::state::Coord;

bitflags! {
    /// Tracks what happened during a single walking transition.
    ///
    /// Each bit records one observable effect, so a report costs a byte
    /// plus the touched slot indices.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct MoveEffects: u8 {
        const MOVED       = 1 << 0;
        const BLOCKED     = 1 << 1;
        const PICKED_UP   = 1 << 2;
        const FOUGHT      = 1 << 3;
        const KILLED      = 1 << 4;
        const PLAYER_DIED = 1 << 5;
    }
}

/// Derived summary of a walking transition, for logs and event consumers.
///
/// Never fed back into state; the authoritative result is the
/// [`crate::MoveOutcome`] arrays.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveReport {
    pub from: Coord,
    pub to: Coord,
    pub effects: MoveEffects,
    pub items_consumed: ArrayVec<u8, { ZoneConfig::NUM_ITEMS }>,
    pub monsters_engaged: ArrayVec<u8, { ZoneConfig::NUM_MONSTERS }>,
}

impl MoveReport {
    pub fn moved(&self) -> bool {
        self.effects.contains(MoveEffects::MOVED)
    }

    pub fn fought(&self) -> bool {
        self.effects.contains(MoveEffects::FOUGHT)
    }
}
