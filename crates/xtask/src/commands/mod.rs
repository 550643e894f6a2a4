//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod board;
mod obstacles;
mod replay;

pub use board::Board;
pub use obstacles::Obstacles;
pub use replay::Replay;

use std::path::Path;

use anyhow::Result;
use zone_content::{ContentFactory, RosterLoader};
use zone_core::Roster;

/// Roster from `path`, or the embedded default.
pub(crate) fn load_roster(path: Option<&Path>) -> Result<Roster> {
    match path {
        Some(path) => RosterLoader::load(path),
        None => ContentFactory::default_roster(),
    }
}
