//! Cloneable façade for issuing commands to the zone.
//!
//! [`ZoneHandle`] hides channel plumbing and offers async helpers for moving
//! players, running gated cell queries, or streaming events from specific
//! topics. Query helpers take a player id; the worker supplies that player's
//! own location, so callers cannot look from someone else's position.
use std::collections::HashMap;

use tokio::sync::{broadcast, mpsc, oneshot};

use zone_core::{
    CellData, Coord, Direction, MoveReport, PlayerData, ZoneConfig, ZoneState, compute_state_root,
};

use super::errors::{Result, RuntimeError};
use super::player::PlayerId;
use crate::events::{Event, EventBus, Topic};
use crate::workers::{CellBatch, Command};

const BATCH: usize = ZoneConfig::QUERY_BATCH;

/// Client-facing handle to interact with the zone
#[derive(Clone)]
pub struct ZoneHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl ZoneHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    async fn request<T>(&self, build: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(build(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Resolve one walking step for `player` right away.
    pub async fn move_player(&self, player: PlayerId, direction: Direction) -> Result<MoveReport> {
        self.request(|reply| Command::Move {
            player,
            direction,
            reply,
        })
        .await?
    }

    /// Resolve one flying step for `player` and return the new location.
    pub async fn fly_player(&self, player: PlayerId, direction: Direction) -> Result<Coord> {
        self.request(|reply| Command::Fly {
            player,
            direction,
            reply,
        })
        .await?
    }

    /// Queue a walking step to be applied by the next [`Self::flush_moves`].
    pub async fn queue_move(&self, player: PlayerId, direction: Direction) -> Result<()> {
        self.request(|reply| Command::QueueMove {
            player,
            direction,
            reply,
        })
        .await?
    }

    /// Apply every queued step in the order it was queued.
    pub async fn flush_moves(&self) -> Result<Vec<(PlayerId, MoveReport)>> {
        self.request(|reply| Command::FlushMoves { reply }).await
    }

    /// The player's own record.
    pub async fn player(&self, player: PlayerId) -> Result<PlayerData> {
        self.request(|reply| Command::Player { player, reply })
            .await?
    }

    pub async fn get_cell(&self, player: PlayerId, coord: Coord) -> Result<CellData> {
        self.request(|reply| Command::QueryCell {
            player,
            coord,
            reply,
        })
        .await?
    }

    /// Any number of independently gated cells, in input order.
    pub async fn get_cells(&self, player: PlayerId, coords: Vec<Coord>) -> Result<Vec<CellData>> {
        self.request(|reply| Command::QueryCells {
            player,
            coords,
            reply,
        })
        .await?
    }

    pub async fn get_five_cells(
        &self,
        player: PlayerId,
        coords: [Coord; BATCH],
    ) -> Result<[CellData; BATCH]> {
        self.batch(player, CellBatch::Five(coords)).await
    }

    pub async fn get_cross_cells(&self, player: PlayerId) -> Result<[CellData; BATCH]> {
        self.batch(player, CellBatch::Cross).await
    }

    pub async fn get_vertical_cells(
        &self,
        player: PlayerId,
        anchor: Coord,
    ) -> Result<[CellData; BATCH]> {
        self.batch(player, CellBatch::Vertical(anchor)).await
    }

    pub async fn get_horizontal_cells(
        &self,
        player: PlayerId,
        anchor: Coord,
    ) -> Result<[CellData; BATCH]> {
        self.batch(player, CellBatch::Horizontal(anchor)).await
    }

    async fn batch(&self, player: PlayerId, batch: CellBatch) -> Result<[CellData; BATCH]> {
        self.request(|reply| Command::QueryBatch {
            player,
            batch,
            reply,
        })
        .await?
    }

    /// Query the full zone state (read-only snapshot).
    ///
    /// This bypasses the visibility gate; never forward it to a player.
    pub async fn query_state(&self) -> Result<ZoneState> {
        self.request(|reply| Command::QueryState { reply }).await
    }

    /// Commitment to the current zone state.
    pub async fn state_root(&self) -> Result<[u8; 32]> {
        let state = self.query_state().await?;
        Ok(compute_state_root(&state))
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Movement` - Walking and flying steps
    /// - `Topic::Query` - Cell query summaries
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    pub fn subscribe_multiple(&self, topics: &[Topic]) -> HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
