//! Zone worker that owns the authoritative [`zone_core::ZoneState`].
//!
//! Receives commands from [`crate::ZoneHandle`], runs them through the
//! engine one at a time, and publishes events to the [`EventBus`].

use std::collections::VecDeque;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, trace, warn};

use zone_core::query::{
    get_cell, get_cross_cells, get_five_cells, get_horizontal_cells, get_vertical_cells,
};
use zone_core::{
    CellData, Coord, Direction, MoveReport, Occupants, PlayerData, ViewConfig, ZoneConfig,
    ZoneState,
};

use crate::api::{PlayerId, Result, RuntimeError};
use crate::events::{Event, EventBus, MovementEvent, QueryEvent};

const BATCH: usize = ZoneConfig::QUERY_BATCH;

/// Per-player pending-move limit when none is configured.
const DEFAULT_QUEUE_LIMIT: usize = 32;

/// Shape of a fixed five-cell query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellBatch {
    Five([Coord; BATCH]),
    Cross,
    Vertical(Coord),
    Horizontal(Coord),
}

/// Commands that can be sent to the zone worker
pub enum Command {
    /// Resolve one walking step immediately.
    Move {
        player: PlayerId,
        direction: Direction,
        reply: oneshot::Sender<Result<MoveReport>>,
    },
    /// Resolve one flying step immediately.
    Fly {
        player: PlayerId,
        direction: Direction,
        reply: oneshot::Sender<Result<Coord>>,
    },
    /// Append a walking step to the pending queue.
    QueueMove {
        player: PlayerId,
        direction: Direction,
        reply: oneshot::Sender<Result<()>>,
    },
    /// Apply every pending step in arrival order.
    FlushMoves {
        reply: oneshot::Sender<Vec<(PlayerId, MoveReport)>>,
    },
    /// Read one player's own record.
    Player {
        player: PlayerId,
        reply: oneshot::Sender<Result<PlayerData>>,
    },
    /// Gated lookup of a single cell.
    QueryCell {
        player: PlayerId,
        coord: Coord,
        reply: oneshot::Sender<Result<CellData>>,
    },
    /// Gated lookup of an arbitrary list of cells.
    QueryCells {
        player: PlayerId,
        coords: Vec<Coord>,
        reply: oneshot::Sender<Result<Vec<CellData>>>,
    },
    /// Gated five-cell lookup.
    QueryBatch {
        player: PlayerId,
        batch: CellBatch,
        reply: oneshot::Sender<Result<[CellData; BATCH]>>,
    },
    /// Query the current zone state (trusted callers only).
    QueryState { reply: oneshot::Sender<ZoneState> },
}

/// Background task that processes zone commands.
pub struct ZoneWorker {
    state: ZoneState,
    view: ViewConfig,
    pending: VecDeque<(PlayerId, Direction)>,
    queue_limit: usize,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
}

impl ZoneWorker {
    /// Creates a new zone worker.
    pub fn new(
        state: ZoneState,
        config: &ZoneConfig,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
    ) -> Self {
        info!(
            target: "runtime::worker",
            view_radius = config.view.radius(),
            live_monsters = state.monsters.iter().filter(|m| m.is_alive()).count(),
            open_items = state.items.iter().filter(|i| !i.is_consumed).count(),
            "ZoneWorker initialized"
        );

        Self {
            state,
            view: config.view,
            pending: VecDeque::new(),
            queue_limit: DEFAULT_QUEUE_LIMIT,
            command_rx,
            event_bus,
        }
    }

    /// Caps how many moves each player may hold in the pending queue.
    pub fn with_queue_limit(mut self, limit: usize) -> Self {
        self.queue_limit = limit;
        self
    }

    /// Main worker loop.
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                Some(cmd) = self.command_rx.recv() => {
                    self.handle_command(cmd);
                }
                else => break,
            }
        }

        if !self.pending.is_empty() {
            warn!(
                target: "runtime::worker",
                dropped = self.pending.len(),
                "ZoneWorker stopped with queued moves"
            );
        }
        debug!(target: "runtime::worker", "ZoneWorker stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Move {
                player,
                direction,
                reply,
            } => {
                let result = self.handle_move(player, direction);
                if reply.send(result).is_err() {
                    debug!("Move reply channel closed (caller dropped)");
                }
            }
            Command::Fly {
                player,
                direction,
                reply,
            } => {
                let result = self.handle_fly(player, direction);
                if reply.send(result).is_err() {
                    debug!("Fly reply channel closed (caller dropped)");
                }
            }
            Command::QueueMove {
                player,
                direction,
                reply,
            } => {
                let result = self.handle_queue(player, direction);
                if reply.send(result).is_err() {
                    debug!("QueueMove reply channel closed (caller dropped)");
                }
            }
            Command::FlushMoves { reply } => {
                let reports = self.handle_flush();
                if reply.send(reports).is_err() {
                    debug!("FlushMoves reply channel closed (caller dropped)");
                }
            }
            Command::Player { player, reply } => {
                let result = player.slot().map(|slot| self.state.players[slot]);
                if reply.send(result).is_err() {
                    debug!("Player reply channel closed (caller dropped)");
                }
            }
            Command::QueryCell {
                player,
                coord,
                reply,
            } => {
                let result = self.query_cell(player, coord);
                if reply.send(result).is_err() {
                    debug!("QueryCell reply channel closed (caller dropped)");
                }
            }
            Command::QueryCells {
                player,
                coords,
                reply,
            } => {
                let result = self.query_cells(player, &coords);
                if reply.send(result).is_err() {
                    debug!("QueryCells reply channel closed (caller dropped)");
                }
            }
            Command::QueryBatch {
                player,
                batch,
                reply,
            } => {
                let result = self.query_batch(player, batch);
                if reply.send(result).is_err() {
                    debug!("QueryBatch reply channel closed (caller dropped)");
                }
            }
            Command::QueryState { reply } => {
                if reply.send(self.state.clone()).is_err() {
                    debug!("QueryState reply channel closed (caller dropped)");
                }
            }
        }
    }

    fn handle_move(&mut self, player: PlayerId, direction: Direction) -> Result<MoveReport> {
        let slot = self.checked_slot(player)?;
        Ok(self.commit_move(player, slot, direction))
    }

    fn commit_move(&mut self, player: PlayerId, slot: usize, direction: Direction) -> MoveReport {
        // `slot` was validated by the caller, so the engine always reports.
        let report = self
            .state
            .apply_move(slot, direction)
            .unwrap_or_default();

        info!(
            target: "runtime::worker",
            %player,
            %direction,
            from = %report.from,
            to = %report.to,
            effects = ?report.effects,
            "Walking step resolved"
        );

        self.event_bus.publish(Event::Movement(MovementEvent::PlayerMoved {
            player,
            from: report.from,
            to: report.to,
            effects: report.effects,
        }));
        report
    }

    fn handle_fly(&mut self, player: PlayerId, direction: Direction) -> Result<Coord> {
        let slot = self.checked_slot(player)?;
        let from = self.state.players[slot].loc;
        let to = self
            .state
            .apply_move_flying(slot, direction)
            .unwrap_or(from);

        info!(
            target: "runtime::worker",
            %player,
            %direction,
            %from,
            %to,
            "Flying step resolved"
        );

        self.event_bus
            .publish(Event::Movement(MovementEvent::PlayerFlew { player, from, to }));
        Ok(to)
    }

    fn handle_queue(&mut self, player: PlayerId, direction: Direction) -> Result<()> {
        self.checked_slot(player)?;

        let queued = self.pending.iter().filter(|(id, _)| *id == player).count();
        if queued >= self.queue_limit {
            warn!(
                target: "runtime::worker",
                %player,
                limit = self.queue_limit,
                "Queued move rejected"
            );
            return Err(RuntimeError::QueueFull {
                player,
                limit: self.queue_limit,
            });
        }

        self.pending.push_back((player, direction));
        trace!(
            target: "runtime::worker",
            %player,
            %direction,
            queued = self.pending.len(),
            "Move queued"
        );
        Ok(())
    }

    fn handle_flush(&mut self) -> Vec<(PlayerId, MoveReport)> {
        let pending = std::mem::take(&mut self.pending);
        debug!(target: "runtime::worker", count = pending.len(), "Flushing queued moves");

        pending
            .into_iter()
            .filter_map(|(player, direction)| {
                let slot = player.slot().ok()?;
                Some((player, self.commit_move(player, slot, direction)))
            })
            .collect()
    }

    /// The querying player's location and the identified entity arrays.
    fn viewer(&self, player: PlayerId) -> Result<(Coord, Occupants)> {
        let slot = self.checked_slot(player)?;
        Ok((self.state.players[slot].loc, Occupants::from(&self.state)))
    }

    fn query_cell(&self, player: PlayerId, coord: Coord) -> Result<CellData> {
        let (origin, occupants) = self.viewer(player)?;
        let cell = get_cell(self.view, origin, coord, &occupants);
        self.publish_query(player, std::slice::from_ref(&cell));
        Ok(cell)
    }

    fn query_cells(&self, player: PlayerId, coords: &[Coord]) -> Result<Vec<CellData>> {
        let (origin, occupants) = self.viewer(player)?;
        let cells: Vec<CellData> = coords
            .iter()
            .map(|&coord| get_cell(self.view, origin, coord, &occupants))
            .collect();
        self.publish_query(player, &cells);
        Ok(cells)
    }

    fn query_batch(&self, player: PlayerId, batch: CellBatch) -> Result<[CellData; BATCH]> {
        let (origin, occupants) = self.viewer(player)?;
        let view = self.view;

        let cells = match batch {
            CellBatch::Five(coords) => get_five_cells(view, origin, coords, &occupants),
            CellBatch::Cross => get_cross_cells(view, origin, &occupants),
            CellBatch::Vertical(anchor) => get_vertical_cells(view, origin, anchor, &occupants),
            CellBatch::Horizontal(anchor) => {
                get_horizontal_cells(view, origin, anchor, &occupants)
            }
        };
        self.publish_query(player, &cells);
        Ok(cells)
    }

    fn publish_query(&self, player: PlayerId, cells: &[CellData]) {
        let invalid = cells.iter().filter(|cell| cell.is_invalid()).count();
        debug!(
            target: "runtime::worker",
            %player,
            count = cells.len(),
            invalid,
            "Cells queried"
        );

        self.event_bus.publish(Event::Query(QueryEvent::CellsQueried {
            player,
            count: cells.len(),
            invalid,
        }));
    }

    fn checked_slot(&self, player: PlayerId) -> Result<usize> {
        player.slot().inspect_err(|_| {
            warn!(target: "runtime::worker", %player, "Command for unknown player rejected");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zone_core::{ItemData, MonsterData};

    fn worker() -> (ZoneWorker, mpsc::Sender<Command>, EventBus) {
        let state = ZoneState::new(
            [
                PlayerData::new(Coord::at(6, 3), 5, 1, 0),
                PlayerData::new(Coord::at(25, 25), 5, 1, 0),
                PlayerData::new(Coord::at(28, 28), 5, 1, 0),
                PlayerData::new(Coord::at(12, 29), 5, 1, 0),
            ],
            {
                let mut items = [ItemData::FILLER; ZoneConfig::NUM_ITEMS];
                items[0] = ItemData::new(Coord::at(7, 3), 10, 2, 1);
                items
            },
            [MonsterData::FILLER; ZoneConfig::NUM_MONSTERS],
        );
        let (tx, rx) = mpsc::channel(4);
        let bus = EventBus::new();
        (
            ZoneWorker::new(state, &ZoneConfig::default(), rx, bus.clone()),
            tx,
            bus,
        )
    }

    #[test]
    fn flush_applies_queue_in_arrival_order() {
        let (mut worker, _tx, _bus) = worker();

        worker.handle_queue(PlayerId(0), Direction::Right).unwrap();
        worker.handle_queue(PlayerId(0), Direction::Left).unwrap();
        let reports = worker.handle_flush();

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].1.to, Coord::at(7, 3));
        assert_eq!(reports[1].1.to, Coord::at(6, 3));
        assert!(worker.pending.is_empty());
        assert!(worker.state.items[0].is_consumed);
    }

    #[test]
    fn unknown_player_is_rejected_before_queueing() {
        let (mut worker, _tx, _bus) = worker();

        assert!(matches!(
            worker.handle_queue(PlayerId(7), Direction::Up),
            Err(RuntimeError::UnknownPlayer { .. })
        ));
        assert!(worker.pending.is_empty());
    }

    #[test]
    fn queue_limit_is_per_player() {
        let (worker, _tx, _bus) = worker();
        let mut worker = worker.with_queue_limit(2);

        worker.handle_queue(PlayerId(0), Direction::Right).unwrap();
        worker.handle_queue(PlayerId(0), Direction::Left).unwrap();
        assert!(matches!(
            worker.handle_queue(PlayerId(0), Direction::Up),
            Err(RuntimeError::QueueFull {
                player: PlayerId(0),
                limit: 2
            })
        ));
        worker.handle_queue(PlayerId(1), Direction::Up).unwrap();
        assert_eq!(worker.pending.len(), 3);

        worker.handle_flush();
        worker.handle_queue(PlayerId(0), Direction::Right).unwrap();
    }

    #[test]
    fn query_publishes_invalid_count() {
        let (worker, _tx, bus) = worker();
        let mut events = bus.subscribe(crate::events::Topic::Query);

        let cells = worker
            .query_batch(PlayerId(0), CellBatch::Vertical(Coord::at(7, 4)))
            .unwrap();
        assert!(cells.iter().all(CellData::is_invalid));

        assert_eq!(
            events.try_recv().unwrap(),
            Event::Query(QueryEvent::CellsQueried {
                player: PlayerId(0),
                count: BATCH,
                invalid: BATCH,
            })
        );
    }
}
