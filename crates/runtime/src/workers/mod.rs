//! Worker tasks that back the runtime orchestration.
//!
//! The zone worker is the single owner of the authoritative state; every
//! move and query is funnelled through its command channel.

mod zone;

pub use zone::{CellBatch, Command, ZoneWorker};
