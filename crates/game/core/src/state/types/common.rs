use core::fmt;

use crate::action::Direction;
use crate::config::ZoneConfig;
use crate::state::CoordError;

/// Discrete board position expressed in tile coordinates.
///
/// Both axes are always inside `[0, 31]`. The only ways to obtain a `Coord`
/// are the validated constructors and [`Coord::step`], which clamps at the
/// board edge instead of wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCoord", into = "RawCoord"))]
pub struct Coord {
    x: u8,
    y: u8,
}

impl Coord {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Builds a coordinate, rejecting anything off the board.
    pub const fn new(x: u8, y: u8) -> Result<Self, CoordError> {
        if x >= ZoneConfig::WIDTH || y >= ZoneConfig::HEIGHT {
            return Err(CoordError::OutOfBounds { x, y });
        }
        Ok(Self { x, y })
    }

    /// Const constructor for baked tables and fixtures.
    ///
    /// # Panics
    ///
    /// Panics (at compile time when used in a `const`) if the position is off the board.
    pub const fn at(x: u8, y: u8) -> Self {
        assert!(
            x < ZoneConfig::WIDTH && y < ZoneConfig::HEIGHT,
            "coordinate outside the zone"
        );
        Self { x, y }
    }

    #[inline]
    pub const fn x(self) -> u8 {
        self.x
    }

    #[inline]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Moves one tile in `direction`, staying put at the board edge.
    pub const fn step(self, direction: Direction) -> Self {
        let Self { mut x, mut y } = self;
        match direction {
            Direction::Up => {
                if y > 0 {
                    y -= 1;
                }
            }
            Direction::Down => {
                if y < ZoneConfig::HEIGHT - 1 {
                    y += 1;
                }
            }
            Direction::Left => {
                if x > 0 {
                    x -= 1;
                }
            }
            Direction::Right => {
                if x < ZoneConfig::WIDTH - 1 {
                    x += 1;
                }
            }
        }
        Self { x, y }
    }

    /// Returns the coordinate shifted by `(dx, dy)`, or `None` if that lands off the board.
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Self::new(x, y).ok()
    }

    /// Per-axis distances `(|dx|, |dy|)` to `other`.
    #[inline]
    pub const fn abs_diff(self, other: Self) -> (u8, u8) {
        (self.x.abs_diff(other.x), self.y.abs_diff(other.y))
    }
}

impl TryFrom<(u8, u8)> for Coord {
    type Error = CoordError;

    fn try_from((x, y): (u8, u8)) -> Result<Self, Self::Error> {
        Self::new(x, y)
    }
}

impl From<Coord> for (u8, u8) {
    fn from(coord: Coord) -> Self {
        (coord.x, coord.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Unvalidated wire form of [`Coord`].
#[cfg(feature = "serde")]
#[derive(Clone, Copy, serde::Serialize, serde::Deserialize)]
struct RawCoord {
    x: u8,
    y: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCoord> for Coord {
    type Error = CoordError;

    fn try_from(raw: RawCoord) -> Result<Self, Self::Error> {
        Self::new(raw.x, raw.y)
    }
}

#[cfg(feature = "serde")]
impl From<Coord> for RawCoord {
    fn from(coord: Coord) -> Self {
        Self {
            x: coord.x,
            y: coord.y,
        }
    }
}
