//! High-level runtime orchestrator.
//!
//! The runtime owns the zone worker, wires up the command channel and event
//! bus, and exposes a builder-based API for seeding the zone.

use std::path::PathBuf;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::info;

use zone_content::ContentFactory;
use zone_core::{ZoneConfig, ZoneState};

use crate::api::{Result, RuntimeError, ZoneHandle};
use crate::events::{Event, EventBus, Topic};
use crate::workers::{Command, ZoneWorker};

/// Runtime configuration shared across the orchestrator and worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub zone: ZoneConfig,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// Moves a single player may hold in the pending queue between flushes.
    pub max_queued_moves: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            zone: ZoneConfig::default(),
            event_buffer_size: 100,
            command_buffer_size: 32,
            max_queued_moves: 32,
        }
    }
}

/// Main runtime that owns the zone worker
///
/// [`ZoneHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: ZoneHandle,
    worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Spawn the zone worker over `state`.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(config: RuntimeConfig, state: ZoneState) -> Self {
        let (command_tx, command_rx) = mpsc::channel::<Command>(config.command_buffer_size);
        let event_bus = EventBus::with_capacity(config.event_buffer_size);

        let worker = ZoneWorker::new(state, &config.zone, command_rx, event_bus.clone())
            .with_queue_limit(config.max_queued_moves);
        let worker_handle = tokio::spawn(worker.run());

        info!(
            target: "runtime",
            command_buffer = config.command_buffer_size,
            event_buffer = config.event_buffer_size,
            max_queued_moves = config.max_queued_moves,
            "Zone runtime started"
        );

        Self {
            handle: ZoneHandle::new(command_tx, event_bus),
            worker_handle,
        }
    }

    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> ZoneHandle {
        self.handle.clone()
    }

    /// Subscribe to events from a specific topic
    pub fn subscribe(&self, topic: Topic) -> tokio::sync::broadcast::Receiver<Event> {
        self.handle.subscribe(topic)
    }

    /// Shutdown the runtime gracefully
    ///
    /// The worker exits once every outstanding [`ZoneHandle`] clone is dropped.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.worker_handle.await.map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`Runtime`] with flexible configuration.
///
/// The starting state is taken from, in order: an explicit state, a content
/// data directory, or the embedded default roster.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    state: Option<ZoneState>,
    data_dir: Option<PathBuf>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            state: None,
            data_dir: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide initial zone state
    pub fn initial_state(mut self, state: ZoneState) -> Self {
        self.state = Some(state);
        self
    }

    /// Load `roster.ron` and `config.toml` from a data directory.
    pub fn data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(data_dir.into());
        self
    }

    /// Build the runtime
    pub fn build(self) -> Result<Runtime> {
        let mut config = self.config;

        let state = match (self.state, self.data_dir) {
            (Some(state), _) => state,
            (None, Some(dir)) => {
                let factory = ContentFactory::new(dir);
                config.zone = factory.load_config().map_err(RuntimeError::Content)?;
                factory.load_state().map_err(RuntimeError::Content)?
            }
            (None, None) => ContentFactory::default_state().map_err(RuntimeError::Content)?,
        };

        Ok(Runtime::start(config, state))
    }
}
