//! Serialized update loop and derived-view broadcast.
//!
//! Stream snapshots and user commands are funneled through one
//! `tokio::select!` loop that owns the [`Board`], so no two mutations ever
//! interleave. After each mutation the derived view is broadcast as an
//! immutable [`ViewUpdate`]; subscribers never observe partial state.

use chrono::Utc;
use serde::Serialize;
use tokio::sync::{broadcast, mpsc};
use tracing::{info, trace};

use warrant_core::{QuoteRow, SortColumn, ViewState};
use warrant_feed::Subscription;

use crate::board::Board;
use crate::filter::FilterInput;

/// A user action, serialized through the update loop.
#[derive(Debug, Clone)]
pub enum Command {
    SelectView(ViewState),
    SetFilters(FilterInput),
    ClearFilters,
    SortColumn(SortColumn),
    Winners,
    Losers,
    Toggle(String),
}

/// One broadcast derived-view update.
#[derive(Debug, Clone, Serialize)]
pub struct ViewUpdate {
    /// When the update was derived (Unix milliseconds).
    pub timestamp_ms: i64,
    /// View the rows were derived from.
    pub view: ViewState,
    /// Ordered quotes with watchlist flags.
    pub rows: Vec<QuoteRow>,
}

/// Handle for drivers of the engine: send commands, subscribe to updates.
#[derive(Debug, Clone)]
pub struct EngineHandle {
    commands: mpsc::Sender<Command>,
    updates: broadcast::Sender<ViewUpdate>,
}

impl EngineHandle {
    /// Queue a user command.
    pub async fn send(
        &self,
        command: Command,
    ) -> Result<(), mpsc::error::SendError<Command>> {
        self.commands.send(command).await
    }

    /// Subscribe to derived-view updates.
    pub fn subscribe(&self) -> broadcast::Receiver<ViewUpdate> {
        self.updates.subscribe()
    }
}

/// The update loop: owns the board, consumes the snapshot subscription and
/// the command queue, publishes derived views.
pub struct Engine {
    board: Board,
    subscription: Subscription,
    commands: mpsc::Receiver<Command>,
    updates: broadcast::Sender<ViewUpdate>,
}

impl Engine {
    /// Build an engine around a board and its snapshot subscription.
    pub fn new(
        board: Board,
        subscription: Subscription,
        command_capacity: usize,
        broadcast_capacity: usize,
    ) -> (Self, EngineHandle) {
        let (command_tx, command_rx) = mpsc::channel(command_capacity);
        let (update_tx, _) = broadcast::channel(broadcast_capacity);
        let handle = EngineHandle {
            commands: command_tx,
            updates: update_tx.clone(),
        };
        let engine = Self {
            board,
            subscription,
            commands: command_rx,
            updates: update_tx,
        };
        (engine, handle)
    }

    /// Run until the snapshot stream and the command queue are both closed.
    pub async fn run(mut self) {
        info!("Engine loop started");
        let mut stream_open = true;
        let mut commands_open = true;

        while stream_open || commands_open {
            tokio::select! {
                snapshot = self.subscription.recv(), if stream_open => {
                    match snapshot {
                        Some(snapshot) => {
                            self.board.ingest(snapshot);
                            self.publish();
                        }
                        None => {
                            info!("Snapshot stream closed");
                            stream_open = false;
                        }
                    }
                }
                command = self.commands.recv(), if commands_open => {
                    match command {
                        Some(command) => {
                            self.apply(command);
                            self.publish();
                        }
                        None => {
                            info!("Command queue closed");
                            commands_open = false;
                        }
                    }
                }
            }
        }
        info!("Engine loop stopped");
    }

    fn apply(&mut self, command: Command) {
        trace!(?command, "Applying command");
        match command {
            Command::SelectView(view) => self.board.select_view(view),
            Command::SetFilters(input) => self.board.set_filters(input),
            Command::ClearFilters => self.board.clear_filters(),
            Command::SortColumn(column) => self.board.sort_column(column),
            Command::Winners => self.board.winners(),
            Command::Losers => self.board.losers(),
            // A failed durable write is already warned by the board; the
            // loop keeps going either way
            Command::Toggle(symbol) => {
                let _ = self.board.toggle(&symbol);
            }
        }
    }

    fn publish(&self) {
        let update = ViewUpdate {
            timestamp_ms: Utc::now().timestamp_millis(),
            view: self.board.view(),
            rows: self.board.rows(),
        };
        match self.updates.send(update) {
            Ok(n) => trace!(receivers = n, "View update sent"),
            // No receivers is normal when nothing is rendering yet
            Err(_) => trace!("No view subscribers"),
        }
    }
}
