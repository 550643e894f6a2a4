//! Encounter result types and resolution.

use crate::state::{MonsterData, PlayerData};

use super::damage::apply_damage;

/// Result of one player/monster exchange.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Encounter {
    /// Damage the player takes (the monster's attack).
    pub damage_to_player: u8,

    /// Monster HP after the player's strike.
    pub monster_hp: u8,

    /// Whether the monster died in this exchange.
    pub killed: bool,
}

/// Resolve a simultaneous exchange between a player and a living monster.
///
/// Both strikes are computed from the stats passed in, so neither side's
/// damage depends on the other's post-exchange state. Callers must pass the
/// player as it was before the move, not a partially updated copy.
pub fn resolve_encounter(player: &PlayerData, monster: &MonsterData) -> Encounter {
    let monster_hp = apply_damage(monster.hp, player.atk);

    Encounter {
        damage_to_player: monster.atk,
        monster_hp,
        killed: monster_hp == 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Coord;

    #[test]
    fn mutual_kill_uses_pre_encounter_stats() {
        let player = PlayerData::new(Coord::at(5, 5), 10, 5, 0);
        let monster = MonsterData::new(Coord::at(6, 5), 3, 20, 7);

        let encounter = resolve_encounter(&player, &monster);

        assert_eq!(encounter.damage_to_player, 20);
        assert_eq!(encounter.monster_hp, 0);
        assert!(encounter.killed);
        // Player would be dead after the exchange, yet still landed the killing blow.
        assert_eq!(apply_damage(player.hp, encounter.damage_to_player), 0);
    }

    #[test]
    fn weak_player_only_wounds() {
        let player = PlayerData::new(Coord::at(5, 5), 5, 1, 0);
        let monster = MonsterData::new(Coord::at(13, 3), 100, 1, 25);

        let encounter = resolve_encounter(&player, &monster);

        assert_eq!(encounter.monster_hp, 99);
        assert!(!encounter.killed);
        assert_eq!(encounter.damage_to_player, 1);
    }
}
