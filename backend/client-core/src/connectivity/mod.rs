//! Background backend reachability monitoring.
//!
//! A single monitor task owns the connectivity state: it probes the
//! backend on start, then every fixed interval, and is the only writer of
//! [`ConnectivityState`]. Everything else reads the state through a
//! `tokio::sync::watch` channel, and outside requests to re-probe go
//! through the monitor's command channel rather than mutating state
//! directly.
//!
//! The latest probe result always wins; there is no hysteresis. A single
//! failed probe is enough to report `Disconnected`.

use crate::api::ApiClient;
use crate::error::connectivity::ConnectivityError;

use common::ErrorLocation;

use std::panic::Location;
use std::time::Duration;

use log::{debug, info};
use tokio::sync::{mpsc, watch};
use tokio::time::MissedTickBehavior;

const PROBE_INTERVAL: Duration = Duration::from_secs(30);
const COMMAND_CHANNEL_CAPACITY: usize = 8;

/// Backend reachability as last observed by the monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectivityState {
    /// No probe has resolved yet (startup, or a forced probe in flight).
    Unknown,
    Connected,
    Disconnected,
}

impl ConnectivityState {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectivityState::Connected)
    }
}

/// Requests handled by the monitor task.
#[derive(Debug, Clone)]
enum MonitorCommand {
    /// Probe now, outside the regular interval. The visible state resets
    /// to `Unknown` until the forced probe resolves.
    RetryConnection,
}

/// Handle to the background connectivity monitor.
///
/// Handles are cheap clones sharing one monitor task. The task keeps
/// probing regardless of prior failures and stops only once every handle
/// has been dropped.
#[derive(Clone)]
pub struct ConnectivityMonitor {
    command_tx: mpsc::Sender<MonitorCommand>,
    state_rx: watch::Receiver<ConnectivityState>,
}

impl ConnectivityMonitor {
    /// Spawn the monitor task and probe immediately.
    pub fn start(client: ApiClient) -> Self {
        let (command_tx, command_rx) = mpsc::channel(COMMAND_CHANNEL_CAPACITY);
        let (state_tx, state_rx) = watch::channel(ConnectivityState::Unknown);

        tokio::spawn(monitor_loop(client, command_rx, state_tx));

        Self {
            command_tx,
            state_rx,
        }
    }

    /// The current state, as of the latest resolved probe.
    pub fn state(&self) -> ConnectivityState {
        *self.state_rx.borrow()
    }

    /// A receiver that observes every state change, for callers that react
    /// to transitions (the shell refreshes its document listing on each
    /// transition into `Connected`).
    pub fn subscribe(&self) -> watch::Receiver<ConnectivityState> {
        self.state_rx.clone()
    }

    /// Force an immediate probe outside the regular interval.
    ///
    /// Returns as soon as the request is queued; the outcome is observed
    /// through [`ConnectivityMonitor::state`] or a subscription.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectivityError::MonitorUnavailable`] if the monitor
    /// task is gone.
    pub async fn retry_connection(&self) -> Result<(), ConnectivityError> {
        self.command_tx
            .send(MonitorCommand::RetryConnection)
            .await
            .map_err(|e| ConnectivityError::MonitorUnavailable {
                message: format!("Connectivity monitor stopped: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

/// The monitor task: sole writer of the connectivity state.
async fn monitor_loop(
    client: ApiClient,
    mut command_rx: mpsc::Receiver<MonitorCommand>,
    state_tx: watch::Sender<ConnectivityState>,
) {
    info!("Connectivity monitor started for {}", client.base_url());

    let mut interval = tokio::time::interval(PROBE_INTERVAL);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            // First tick fires immediately: the startup probe.
            _ = interval.tick() => {
                let observed = probe(&client).await;
                publish(&state_tx, observed);
            }
            command = command_rx.recv() => match command {
                Some(MonitorCommand::RetryConnection) => {
                    publish(&state_tx, ConnectivityState::Unknown);
                    let observed = probe(&client).await;
                    publish(&state_tx, observed);
                    interval.reset();
                }
                // All handles dropped.
                None => break,
            }
        }
    }

    debug!("Connectivity monitor stopped");
}

async fn probe(client: &ApiClient) -> ConnectivityState {
    if client.probe_backend().await {
        ConnectivityState::Connected
    } else {
        ConnectivityState::Disconnected
    }
}

fn publish(state_tx: &watch::Sender<ConnectivityState>, next: ConnectivityState) {
    let previous = *state_tx.borrow();
    if previous != next {
        info!("Connectivity changed: {previous:?} -> {next:?}");
    }
    state_tx.send_replace(next);
}
