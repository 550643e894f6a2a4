use std::fmt;

use serde::{Deserialize, Serialize};
use zone_core::ZoneConfig;

use super::errors::{Result, RuntimeError};

/// Index of one of the zone's player slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    pub const ALL: [PlayerId; ZoneConfig::NUM_PLAYERS] =
        [PlayerId(0), PlayerId(1), PlayerId(2), PlayerId(3)];

    /// Slot index into the state arrays, if this id names a real player.
    pub fn slot(self) -> Result<usize> {
        let slot = usize::from(self.0);
        if slot < ZoneConfig::NUM_PLAYERS {
            Ok(slot)
        } else {
            Err(RuntimeError::UnknownPlayer { player: self })
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player#{}", self.0)
    }
}

impl From<u8> for PlayerId {
    fn from(id: u8) -> Self {
        Self(id)
    }
}
