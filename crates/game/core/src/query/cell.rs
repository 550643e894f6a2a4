use crate::config::ZoneConfig;
use crate::state::{Coord, ItemWithId, MonsterWithId, PlayerWithId, ZoneState};

/// What a query found at a cell.
///
/// `Invalid` means the query itself was refused and nothing is disclosed;
/// `None` means the cell was legally inspected and is empty.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Default,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum EntityType {
    Invalid = 0,
    Player = 1,
    Item = 2,
    Monster = 3,
    #[default]
    None = 4,
}

/// Snapshot of a single cell, the only shape in which entity data leaves a query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellData {
    pub entity_type: EntityType,
    pub entity_id: u8,
    pub hp: u8,
    pub atk: u8,
    pub points: u8,
}

impl CellData {
    pub const INVALID: Self = Self::blank(EntityType::Invalid);
    pub const EMPTY: Self = Self::blank(EntityType::None);

    const fn blank(entity_type: EntityType) -> Self {
        Self {
            entity_type,
            entity_id: 0,
            hp: 0,
            atk: 0,
            points: 0,
        }
    }

    #[inline]
    pub const fn is_invalid(&self) -> bool {
        matches!(self.entity_type, EntityType::Invalid)
    }
}

/// Identified entity arrays a cell lookup scans.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Occupants {
    pub players: [PlayerWithId; ZoneConfig::NUM_PLAYERS],
    pub items: [ItemWithId; ZoneConfig::NUM_ITEMS],
    pub monsters: [MonsterWithId; ZoneConfig::NUM_MONSTERS],
}

impl Occupants {
    pub fn new(
        players: [PlayerWithId; ZoneConfig::NUM_PLAYERS],
        items: [ItemWithId; ZoneConfig::NUM_ITEMS],
        monsters: [MonsterWithId; ZoneConfig::NUM_MONSTERS],
    ) -> Self {
        Self {
            players,
            items,
            monsters,
        }
    }
}

impl From<&ZoneState> for Occupants {
    fn from(state: &ZoneState) -> Self {
        Self::new(
            state.players_with_id(),
            state.items_with_id(),
            state.monsters_with_id(),
        )
    }
}

/// Resolves whichever entity occupies `coord`, without any visibility check.
///
/// Consumed items and dead monsters no longer occupy their tile. On overlap
/// the first match wins in the order players, items, monsters.
pub fn get_cell_no_check(coord: Coord, occupants: &Occupants) -> CellData {
    if let Some(found) = occupants.players.iter().find(|p| p.data.loc == coord) {
        return CellData {
            entity_type: EntityType::Player,
            entity_id: found.id,
            hp: found.data.hp,
            atk: found.data.atk,
            points: found.data.points,
        };
    }

    if let Some(found) = occupants
        .items
        .iter()
        .find(|item| item.data.is_available_at(coord))
    {
        return CellData {
            entity_type: EntityType::Item,
            entity_id: found.id,
            hp: found.data.hp,
            atk: found.data.atk,
            points: found.data.points,
        };
    }

    if let Some(found) = occupants
        .monsters
        .iter()
        .find(|monster| monster.data.is_alive_at(coord))
    {
        return CellData {
            entity_type: EntityType::Monster,
            entity_id: found.id,
            hp: found.data.hp,
            atk: found.data.atk,
            points: found.data.points,
        };
    }

    CellData::EMPTY
}
