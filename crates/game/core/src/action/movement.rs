/// Orthogonal step direction. There are no diagonal moves.
///
/// Screen orientation: `Up` decreases `y`, `Right` increases `x`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Coord;
    use core::str::FromStr;

    #[test]
    fn parses_case_insensitive_names() {
        assert_eq!(Direction::from_str("up"), Ok(Direction::Up));
        assert_eq!(Direction::from_str("LEFT"), Ok(Direction::Left));
        assert!(Direction::from_str("north").is_err());
        assert_eq!(Direction::Right.as_ref(), "right");
    }

    #[test]
    fn delta_agrees_with_step_away_from_edges() {
        let centre = Coord::at(15, 15);
        for direction in Direction::ALL {
            let (dx, dy) = direction.delta();
            assert_eq!(centre.offset(dx, dy), Some(centre.step(direction)));
            assert_eq!(centre.step(direction).step(direction.opposite()), centre);
        }
    }
}
