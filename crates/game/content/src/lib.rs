//! Data-driven zone content and loaders.
//!
//! This crate houses the starting roster and zone configuration as data
//! files and provides loaders for them:
//! - Roster (players, items, monsters) in RON
//! - Zone configuration (perception window) in TOML
//!
//! The default data set is embedded at compile time so tools and tests can
//! seed a zone without touching the filesystem.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, RosterLoader, RosterSpec};
