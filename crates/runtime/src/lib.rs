//! Runtime orchestration for the zone engine.
//!
//! This crate owns the authoritative [`zone_core::ZoneState`], serializes
//! moves from every player into a single total order, and answers gated
//! cell queries. Consumers embed [`Runtime`] and talk to the zone through
//! the cloneable [`ZoneHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides the topic-based event bus
//! - `workers` keeps the background task internal to the crate
pub mod api;
pub mod events;
pub mod runtime;

mod workers;

pub use api::{PlayerId, Result, RuntimeError, ZoneHandle};
pub use events::{Event, EventBus, MovementEvent, QueryEvent, Topic};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
