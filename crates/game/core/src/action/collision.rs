//! Collision resolution for a single step.
//!
//! Each check compares the candidate tile against an entire fixed set. The
//! sets never shrink: soft-deleted entities are filtered by the caller, and
//! the acting player's own location is always part of the player set, so a
//! step clamped at the board edge resolves to "no movement" naturally.

use crate::action::Direction;
use crate::config::ZoneConfig;
use crate::env::OBSTACLES;
use crate::state::Coord;

#[inline]
fn hits_any(candidate: Coord, set: &[Coord]) -> bool {
    set.iter().any(|&occupied| occupied == candidate)
}

/// Walking collision: players and static terrain block.
pub fn resolve_collisions(
    old: Coord,
    direction: Direction,
    players: &[Coord; ZoneConfig::NUM_PLAYERS],
) -> Coord {
    let candidate = old.step(direction);

    if hits_any(candidate, players) || hits_any(candidate, &OBSTACLES) {
        return old;
    }
    candidate
}

/// Flying collision: players, monsters and items block; terrain does not.
pub fn resolve_flying(
    old: Coord,
    direction: Direction,
    players: &[Coord; ZoneConfig::NUM_PLAYERS],
    monsters: &[Coord; ZoneConfig::NUM_MONSTERS],
    items: &[Coord; ZoneConfig::NUM_ITEMS],
) -> Coord {
    let candidate = old.step(direction);

    if hits_any(candidate, players) || hits_any(candidate, monsters) || hits_any(candidate, items) {
        return old;
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::is_obstacle;

    const FAR: Coord = Coord::at(31, 0);

    fn lone_player(at: Coord) -> [Coord; ZoneConfig::NUM_PLAYERS] {
        [at, FAR, FAR, FAR]
    }

    #[test]
    fn free_step_is_accepted() {
        let origin = Coord::at(10, 10);
        assert_eq!(
            resolve_collisions(origin, Direction::Up, &lone_player(origin)),
            Coord::at(10, 9)
        );
    }

    #[test]
    fn other_player_blocks() {
        let origin = Coord::at(10, 10);
        let players = [origin, Coord::at(11, 10), FAR, FAR];
        assert_eq!(resolve_collisions(origin, Direction::Right, &players), origin);
    }

    #[test]
    fn obstacle_blocks_walking() {
        let origin = Coord::at(10, 10);
        assert!(is_obstacle(Coord::at(9, 10)));
        assert_eq!(
            resolve_collisions(origin, Direction::Left, &lone_player(origin)),
            origin
        );
    }

    #[test]
    fn edge_clamp_is_no_movement() {
        let origin = Coord::at(0, 0);
        assert_eq!(
            resolve_collisions(origin, Direction::Up, &lone_player(origin)),
            origin
        );
    }

    #[test]
    fn rejection_is_idempotent() {
        let origin = Coord::at(10, 10);
        let players = lone_player(origin);
        let once = resolve_collisions(origin, Direction::Left, &players);
        let twice = resolve_collisions(once, Direction::Left, &players);
        assert_eq!(once, origin);
        assert_eq!(twice, origin);
    }

    #[test]
    fn flying_passes_over_terrain() {
        let origin = Coord::at(10, 10);
        let monsters = [FAR; ZoneConfig::NUM_MONSTERS];
        let items = [FAR; ZoneConfig::NUM_ITEMS];
        assert_eq!(
            resolve_flying(origin, Direction::Left, &lone_player(origin), &monsters, &items),
            Coord::at(9, 10)
        );
    }

    #[test]
    fn flying_is_blocked_by_entities() {
        let origin = Coord::at(10, 10);
        let players = lone_player(origin);

        let mut monsters = [FAR; ZoneConfig::NUM_MONSTERS];
        let mut items = [FAR; ZoneConfig::NUM_ITEMS];
        monsters[22] = Coord::at(10, 11);
        items[11] = Coord::at(11, 10);

        assert_eq!(
            resolve_flying(origin, Direction::Down, &players, &monsters, &items),
            origin
        );
        assert_eq!(
            resolve_flying(origin, Direction::Right, &players, &monsters, &items),
            origin
        );
        assert_eq!(
            resolve_flying(origin, Direction::Up, &players, &monsters, &items),
            Coord::at(10, 9)
        );
    }
}
