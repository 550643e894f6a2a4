//! State construction errors.
//!
//! Errors related to building coordinates and filling fixed-capacity rosters.

use crate::error::{ErrorSeverity, GameError};

/// A coordinate fell outside the 32×32 board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoordError {
    #[error("coordinate ({x}, {y}) is outside the zone")]
    OutOfBounds { x: u8, y: u8 },
}

impl GameError for CoordError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfBounds { .. } => "COORD_OUT_OF_BOUNDS",
        }
    }
}

/// Errors raised while assembling a roster for a fresh [`crate::ZoneState`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitializationError {
    /// Item list is full (max capacity reached).
    #[error("item list is full (max: {max})")]
    TooManyItems { max: usize },

    /// Monster list is full (max capacity reached).
    #[error("monster list is full (max: {max})")]
    TooManyMonsters { max: usize },
}

impl GameError for InitializationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::TooManyItems { .. } => "TOO_MANY_ITEMS",
            Self::TooManyMonsters { .. } => "TOO_MANY_MONSTERS",
        }
    }
}
