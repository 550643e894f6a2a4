//! Authoritative zone state representation.
//!
//! This module owns the fixed-capacity records for players, items, and
//! monsters plus the roster used to seed a fresh zone. Runtime layers clone
//! or query this state but mutate it exclusively through the transitions in
//! [`crate::action`].
pub mod error;
pub mod types;

use arrayvec::ArrayVec;

use crate::action::{Direction, MoveReport, apply_move, apply_move_flying};
use crate::config::ZoneConfig;
pub use error::{CoordError, InitializationError};
pub use types::{
    Coord, ItemData, ItemWithId, MonsterData, MonsterWithId, PlayerData, PlayerWithId,
};

const NUM_PLAYERS: usize = ZoneConfig::NUM_PLAYERS;
const NUM_ITEMS: usize = ZoneConfig::NUM_ITEMS;
const NUM_MONSTERS: usize = ZoneConfig::NUM_MONSTERS;

/// Starting placement for a zone.
///
/// Items and monsters may number fewer than capacity; the remaining slots
/// are padded with soft-deleted fillers when the state is built.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster {
    pub players: [PlayerData; NUM_PLAYERS],
    pub items: ArrayVec<ItemData, NUM_ITEMS>,
    pub monsters: ArrayVec<MonsterData, NUM_MONSTERS>,
}

impl Roster {
    pub fn new(players: [PlayerData; NUM_PLAYERS]) -> Self {
        Self {
            players,
            items: ArrayVec::new(),
            monsters: ArrayVec::new(),
        }
    }

    pub fn push_item(&mut self, item: ItemData) -> Result<(), InitializationError> {
        self.items
            .try_push(item)
            .map_err(|_| InitializationError::TooManyItems { max: NUM_ITEMS })
    }

    pub fn push_monster(&mut self, monster: MonsterData) -> Result<(), InitializationError> {
        self.monsters
            .try_push(monster)
            .map_err(|_| InitializationError::TooManyMonsters { max: NUM_MONSTERS })
    }
}

/// Canonical snapshot of the deterministic zone state.
///
/// Identity is positional: player `i` is `players[i]`, and so on. Slots are
/// never created or destroyed, only their fields and flags change.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneState {
    pub players: [PlayerData; NUM_PLAYERS],
    pub items: [ItemData; NUM_ITEMS],
    pub monsters: [MonsterData; NUM_MONSTERS],
}

impl ZoneState {
    pub fn new(
        players: [PlayerData; NUM_PLAYERS],
        items: [ItemData; NUM_ITEMS],
        monsters: [MonsterData; NUM_MONSTERS],
    ) -> Self {
        Self {
            players,
            items,
            monsters,
        }
    }

    /// Lays out a roster into the fixed arrays, padding unused slots.
    pub fn from_roster(roster: &Roster) -> Self {
        let items = core::array::from_fn(|i| {
            roster.items.get(i).copied().unwrap_or(ItemData::FILLER)
        });
        let monsters = core::array::from_fn(|i| {
            roster.monsters.get(i).copied().unwrap_or(MonsterData::FILLER)
        });
        Self::new(roster.players, items, monsters)
    }

    pub fn player(&self, id: usize) -> Option<&PlayerData> {
        self.players.get(id)
    }

    pub fn player_coords(&self) -> [Coord; NUM_PLAYERS] {
        self.players.map(|player| player.loc)
    }

    pub fn item_coords(&self) -> [Coord; NUM_ITEMS] {
        self.items.map(|item| item.loc)
    }

    pub fn monster_coords(&self) -> [Coord; NUM_MONSTERS] {
        self.monsters.map(|monster| monster.loc)
    }

    pub fn players_with_id(&self) -> [PlayerWithId; NUM_PLAYERS] {
        core::array::from_fn(|i| PlayerWithId {
            id: i as u8,
            data: self.players[i],
        })
    }

    pub fn items_with_id(&self) -> [ItemWithId; NUM_ITEMS] {
        core::array::from_fn(|i| ItemWithId {
            id: i as u8,
            data: self.items[i],
        })
    }

    pub fn monsters_with_id(&self) -> [MonsterWithId; NUM_MONSTERS] {
        core::array::from_fn(|i| MonsterWithId {
            id: i as u8,
            data: self.monsters[i],
        })
    }

    /// Runs the walking transition for player `id` and commits the result.
    ///
    /// Returns `None` (and leaves the state untouched) if `id` is not a player slot.
    pub fn apply_move(&mut self, id: usize, direction: Direction) -> Option<MoveReport> {
        let player = *self.players.get(id)?;
        let outcome = apply_move(
            player,
            direction,
            self.player_coords(),
            self.monsters,
            self.items,
        );

        self.players[id] = outcome.player;
        self.items = outcome.items;
        self.monsters = outcome.monsters;

        Some(outcome.report)
    }

    /// Runs the flying transition for player `id`; only that player's location changes.
    ///
    /// Consumed items and dead monsters no longer block. Their slots are
    /// masked with the mover's own location, which can never be a step target.
    pub fn apply_move_flying(&mut self, id: usize, direction: Direction) -> Option<Coord> {
        let origin = self.players.get(id)?.loc;

        let monster_coords = self
            .monsters
            .map(|monster| if monster.is_alive() { monster.loc } else { origin });
        let item_coords = self
            .items
            .map(|item| if item.is_consumed { origin } else { item.loc });

        let destination = apply_move_flying(
            origin,
            direction,
            self.player_coords(),
            monster_coords,
            item_coords,
        );
        self.players[id].loc = destination;

        Some(destination)
    }
}

/// Computes a deterministic 32-byte commitment to a zone snapshot.
///
/// SHA-256 over the bincode encoding. Two states hash equal iff every
/// field of every slot is equal, so an external verifier can pin the
/// exact snapshot a transition was applied to.
#[cfg(feature = "serde")]
pub fn compute_state_root(state: &ZoneState) -> [u8; 32] {
    use sha2::{Digest, Sha256};

    let mut hasher = Sha256::new();
    // bincode serialization is deterministic; fixed arrays encode without length prefixes
    if let Ok(bytes) = bincode::serialize(state) {
        hasher.update(&bytes);
    }
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_roster() -> Roster {
        let mut roster = Roster::new([
            PlayerData::new(Coord::at(3, 27), 5, 1, 0),
            PlayerData::new(Coord::at(19, 27), 5, 1, 0),
            PlayerData::new(Coord::at(28, 28), 5, 1, 0),
            PlayerData::new(Coord::at(12, 29), 5, 1, 0),
        ]);
        roster
            .push_item(ItemData::new(Coord::at(4, 27), 10, 2, 1))
            .unwrap();
        roster
            .push_monster(MonsterData::new(Coord::at(3, 26), 1, 1, 1))
            .unwrap();
        roster
    }

    #[test]
    fn from_roster_pads_with_soft_deleted_slots() {
        let state = ZoneState::from_roster(&sample_roster());

        assert!(!state.items[0].is_consumed);
        assert!(state.items[1..].iter().all(|item| item.is_consumed));
        assert!(state.monsters[0].is_alive());
        assert!(state.monsters[1..].iter().all(|monster| !monster.is_alive()));
    }

    #[test]
    fn roster_rejects_overflow() {
        let mut roster = sample_roster();
        for _ in 1..NUM_ITEMS {
            roster.push_item(ItemData::FILLER).unwrap();
        }
        assert_eq!(
            roster.push_item(ItemData::FILLER),
            Err(InitializationError::TooManyItems { max: NUM_ITEMS })
        );
    }

    #[test]
    fn with_id_wrappers_carry_slot_index() {
        let state = ZoneState::from_roster(&sample_roster());
        let monsters = state.monsters_with_id();
        assert!(monsters.iter().enumerate().all(|(i, m)| m.id as usize == i));
        assert_eq!(state.players_with_id()[2].data.loc, Coord::at(28, 28));
    }

    #[test]
    fn apply_move_commits_pickup() {
        let mut state = ZoneState::from_roster(&sample_roster());
        let report = state.apply_move(0, Direction::Right).unwrap();

        assert_eq!(state.players[0].loc, Coord::at(4, 27));
        assert_eq!(state.players[0].hp, 15);
        assert!(state.items[0].is_consumed);
        assert_eq!(report.items_consumed.as_slice(), &[0]);
    }

    #[test]
    fn apply_move_rejects_unknown_player() {
        let mut state = ZoneState::from_roster(&sample_roster());
        let before = state.clone();
        assert!(state.apply_move(4, Direction::Up).is_none());
        assert!(state.apply_move_flying(9, Direction::Up).is_none());
        assert_eq!(state, before);
    }

    #[test]
    fn flying_ignores_soft_deleted_slots() {
        let mut state = ZoneState::from_roster(&sample_roster());
        state.monsters[0].hp = 0;

        // Dead monster at (3, 26) no longer blocks.
        assert_eq!(state.apply_move_flying(0, Direction::Up), Some(Coord::at(3, 26)));
        // The monster record itself is untouched.
        assert_eq!(state.monsters[0].loc, Coord::at(3, 26));
    }

    #[test]
    fn flying_is_blocked_by_live_monster() {
        let mut state = ZoneState::from_roster(&sample_roster());
        assert_eq!(state.apply_move_flying(0, Direction::Up), Some(Coord::at(3, 27)));
        assert_eq!(state.monsters[0].hp, 1);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn state_root_tracks_every_field() {
        let state = ZoneState::from_roster(&sample_roster());
        let root = compute_state_root(&state);
        assert_eq!(root, compute_state_root(&state.clone()));

        let mut moved = state.clone();
        moved.items[5].is_consumed = false;
        assert_ne!(hex::encode(root), hex::encode(compute_state_root(&moved)));
    }
}
