use crate::error::{ErrorSeverity, GameError};

/// Zone configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneConfig {
    /// Perception window used by every query entry point.
    #[cfg_attr(feature = "serde", serde(default))]
    pub view: ViewConfig,
}

impl ZoneConfig {
    // ===== compile-time constants used as array lengths =====
    pub const WIDTH: u8 = 32;
    pub const HEIGHT: u8 = 32;
    pub const NUM_PLAYERS: usize = 4;
    pub const NUM_ITEMS: usize = 12;
    pub const NUM_MONSTERS: usize = 23;
    /// Length of the baked terrain table in [`crate::env::OBSTACLES`].
    pub const NUM_OBSTACLES: usize = 183;
    /// Number of cells returned by every batch query.
    pub const QUERY_BATCH: usize = 5;

    pub fn new() -> Self {
        Self {
            view: ViewConfig::default(),
        }
    }

    pub fn with_view(view: ViewConfig) -> Self {
        Self { view }
    }
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViewConfigError {
    #[error("view radius {radius} exceeds maximum {max}")]
    RadiusTooLarge { radius: u8, max: u8 },
}

impl GameError for ViewConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::RadiusTooLarge { .. } => "VIEW_RADIUS_TOO_LARGE",
        }
    }
}

/// Maximum per-axis distance at which a player may inspect a cell.
///
/// A radius of 2 gives the 5×5 window the batch queries are shaped for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct ViewConfig {
    radius: u8,
}

impl ViewConfig {
    pub const DEFAULT_RADIUS: u8 = 2;
    pub const MAX_RADIUS: u8 = ZoneConfig::WIDTH - 1;

    pub const fn new(radius: u8) -> Result<Self, ViewConfigError> {
        if radius > Self::MAX_RADIUS {
            return Err(ViewConfigError::RadiusTooLarge {
                radius,
                max: Self::MAX_RADIUS,
            });
        }
        Ok(Self { radius })
    }

    #[inline]
    pub const fn radius(self) -> u8 {
        self.radius
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            radius: Self::DEFAULT_RADIUS,
        }
    }
}

impl TryFrom<u8> for ViewConfig {
    type Error = ViewConfigError;

    fn try_from(radius: u8) -> Result<Self, Self::Error> {
        Self::new(radius)
    }
}

impl From<ViewConfig> for u8 {
    fn from(view: ViewConfig) -> u8 {
        view.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_view_is_five_by_five() {
        let config = ZoneConfig::default();
        assert_eq!(config.view.radius(), 2);
        assert_eq!(2 * config.view.radius() as usize + 1, ZoneConfig::QUERY_BATCH);
    }

    #[test]
    fn rejects_radius_beyond_board() {
        assert!(ViewConfig::new(31).is_ok());
        assert_eq!(
            ViewConfig::new(32),
            Err(ViewConfigError::RadiusTooLarge { radius: 32, max: 31 })
        );
    }
}
