//! Perception gate applied before any cell is disclosed.
//!
//! A query is refused when the target lies more than `view.radius()` tiles
//! from the querying player along either axis. Each check returns `true`
//! for a refused query.

use crate::config::ViewConfig;
use crate::state::Coord;

#[inline]
pub fn invalid_coord_x(view: ViewConfig, player: Coord, query: Coord) -> bool {
    player.x().abs_diff(query.x()) > view.radius()
}

#[inline]
pub fn invalid_coord_y(view: ViewConfig, player: Coord, query: Coord) -> bool {
    player.y().abs_diff(query.y()) > view.radius()
}

#[inline]
pub fn invalid_coord(view: ViewConfig, player: Coord, query: Coord) -> bool {
    invalid_coord_x(view, player, query) || invalid_coord_y(view, player, query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_window_is_five_by_five() {
        let view = ViewConfig::default();
        let player = Coord::at(10, 10);

        assert!(!invalid_coord(view, player, Coord::at(8, 12)));
        assert!(!invalid_coord(view, player, Coord::at(12, 8)));
        assert!(invalid_coord(view, player, Coord::at(13, 10)));
        assert!(invalid_coord(view, player, Coord::at(10, 7)));
    }

    #[test]
    fn axes_are_checked_independently() {
        let view = ViewConfig::default();
        let player = Coord::at(10, 10);
        let query = Coord::at(20, 11);

        assert!(invalid_coord_x(view, player, query));
        assert!(!invalid_coord_y(view, player, query));
        assert!(invalid_coord(view, player, query));
    }

    #[test]
    fn zero_radius_sees_only_own_tile() {
        let view = ViewConfig::new(0).unwrap();
        let player = Coord::at(4, 4);

        assert!(!invalid_coord(view, player, player));
        assert!(invalid_coord(view, player, Coord::at(4, 5)));
    }

    proptest! {
        #[test]
        fn gate_matches_chebyshev_distance(
            radius in 0u8..32,
            px in 0u8..32, py in 0u8..32,
            qx in 0u8..32, qy in 0u8..32,
        ) {
            let view = ViewConfig::new(radius).unwrap();
            let (dx, dy) = Coord::at(px, py).abs_diff(Coord::at(qx, qy));
            prop_assert_eq!(
                invalid_coord(view, Coord::at(px, py), Coord::at(qx, qy)),
                dx.max(dy) > radius
            );
        }
    }
}
