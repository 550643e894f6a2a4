use super::Coord;

/// Mutable record for one of the four players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerData {
    pub loc: Coord,
    pub hp: u8,
    pub atk: u8,
    pub points: u8,
}

impl PlayerData {
    pub const fn new(loc: Coord, hp: u8, atk: u8, points: u8) -> Self {
        Self {
            loc,
            hp,
            atk,
            points,
        }
    }

    #[inline]
    pub const fn is_alive(&self) -> bool {
        self.hp > 0
    }
}

/// Pickup placed on the board.
///
/// Consumption is a flag rather than removal so item indices stay stable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemData {
    pub loc: Coord,
    pub hp: u8,
    pub atk: u8,
    pub points: u8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_consumed: bool,
}

impl ItemData {
    pub const fn new(loc: Coord, hp: u8, atk: u8, points: u8) -> Self {
        Self {
            loc,
            hp,
            atk,
            points,
            is_consumed: false,
        }
    }

    /// Soft-deleted slot used to pad a roster to full capacity.
    pub const FILLER: Self = Self {
        loc: Coord::ORIGIN,
        hp: 0,
        atk: 0,
        points: 0,
        is_consumed: true,
    };

    /// True if the item still sits on `coord` waiting to be picked up.
    #[inline]
    pub fn is_available_at(&self, coord: Coord) -> bool {
        !self.is_consumed && self.loc == coord
    }
}

/// Hostile entity. `hp == 0` means dead; the slot is never removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterData {
    pub loc: Coord,
    pub hp: u8,
    pub atk: u8,
    pub points: u8,
}

impl MonsterData {
    pub const fn new(loc: Coord, hp: u8, atk: u8, points: u8) -> Self {
        Self {
            loc,
            hp,
            atk,
            points,
        }
    }

    /// Dead slot used to pad a roster to full capacity.
    pub const FILLER: Self = Self {
        loc: Coord::ORIGIN,
        hp: 0,
        atk: 0,
        points: 0,
    };

    #[inline]
    pub const fn is_alive(&self) -> bool {
        self.hp != 0
    }

    /// True if a living monster stands on `coord`.
    #[inline]
    pub fn is_alive_at(&self, coord: Coord) -> bool {
        self.is_alive() && self.loc == coord
    }
}

/// Player record tagged with its slot index, used as query input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerWithId {
    pub id: u8,
    pub data: PlayerData,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemWithId {
    pub id: u8,
    pub data: ItemData,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterWithId {
    pub id: u8,
    pub data: MonsterData,
}
