//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! the worker and event plumbing can stay internal.

pub mod errors;
pub mod handle;
pub mod player;

pub use errors::{Result, RuntimeError};
pub use handle::ZoneHandle;
pub use player::PlayerId;
