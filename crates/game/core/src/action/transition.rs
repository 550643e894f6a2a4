//! Walking and flying transitions.
//!
//! Both are total functions: every input produces a next state, and a move
//! that cannot happen degrades to "stay in place".

use crate::action::collision::{resolve_collisions, resolve_flying};
use crate::action::report::{MoveEffects, MoveReport};
use crate::action::Direction;
use crate::combat::resolve_encounter;
use crate::config::ZoneConfig;
use crate::state::{Coord, ItemData, MonsterData, PlayerData};

/// Complete replacement for the sub-state touched by [`apply_move`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveOutcome {
    pub player: PlayerData,
    pub items: [ItemData; ZoneConfig::NUM_ITEMS],
    pub monsters: [MonsterData; ZoneConfig::NUM_MONSTERS],
    pub report: MoveReport,
}

/// Resolves one walking step for the acting player.
///
/// 1. Collision against all players and the static obstacles.
///    A rejected step resolves to the player's own tile.
/// 2. Pickup of every unconsumed item on the resolved tile.
/// 3. Combat with every living monster on the resolved tile, using the
///    player's pre-move stats; any fight cancels the move.
///
/// Other players are never touched; the caller applies one acting player at a time.
pub fn apply_move(
    player: PlayerData,
    direction: Direction,
    players: [Coord; ZoneConfig::NUM_PLAYERS],
    mut monsters: [MonsterData; ZoneConfig::NUM_MONSTERS],
    mut items: [ItemData; ZoneConfig::NUM_ITEMS],
) -> MoveOutcome {
    let origin = player.loc;
    let mut destination = resolve_collisions(origin, direction, &players);

    let mut next = player;
    let mut report = MoveReport {
        from: origin,
        ..MoveReport::default()
    };

    for (id, item) in items.iter_mut().enumerate() {
        if !item.is_available_at(destination) {
            continue;
        }
        item.is_consumed = true;
        next.atk = next.atk.saturating_add(item.atk);
        next.hp = next.hp.saturating_add(item.hp);
        next.points = next.points.saturating_add(item.points);

        report.effects |= MoveEffects::PICKED_UP;
        report.items_consumed.push(id as u8);
    }

    for (id, monster) in monsters.iter_mut().enumerate() {
        if !monster.is_alive_at(destination) {
            continue;
        }
        let encounter = resolve_encounter(&player, monster);

        next.hp = next.hp.saturating_sub(encounter.damage_to_player);
        if encounter.killed {
            next.atk = next.atk.saturating_add(monster.atk);
            next.points = next.points.saturating_add(monster.points);
            report.effects |= MoveEffects::KILLED;
        }
        monster.hp = encounter.monster_hp;

        report.effects |= MoveEffects::FOUGHT;
        report.monsters_engaged.push(id as u8);
    }

    if report.fought() {
        destination = origin;
    }
    next.loc = destination;

    report.to = destination;
    report.effects |= if destination == origin {
        MoveEffects::BLOCKED
    } else {
        MoveEffects::MOVED
    };
    if player.is_alive() && !next.is_alive() {
        report.effects |= MoveEffects::PLAYER_DIED;
    }

    MoveOutcome {
        player: next,
        items,
        monsters,
        report,
    }
}

/// Resolves one flying step. Only the returned location changes; flying
/// never picks up items or starts fights.
pub fn apply_move_flying(
    old: Coord,
    direction: Direction,
    players: [Coord; ZoneConfig::NUM_PLAYERS],
    monsters: [Coord; ZoneConfig::NUM_MONSTERS],
    items: [Coord; ZoneConfig::NUM_ITEMS],
) -> Coord {
    resolve_flying(old, direction, &players, &monsters, &items)
}
