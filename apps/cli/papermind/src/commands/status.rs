use crate::commands::documents::print_documents;
use crate::error::PapermindError;

use client_core::api::ApiClient;
use client_core::connectivity::{ConnectivityMonitor, ConnectivityState};

use common::ErrorLocation;

use std::panic::Location;
use std::time::SystemTime;

use humantime::format_rfc3339_seconds;
use log::warn;

/// One-shot reachability check. Exits nonzero when the backend is down so
/// the command is usable from scripts.
pub async fn status(client: &ApiClient) -> Result<(), PapermindError> {
    if client.probe_backend().await {
        println!("Backend reachable at {}", client.base_url());
        Ok(())
    } else {
        Err(PapermindError::App {
            message: format!("Backend unreachable at {}", client.base_url()),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

/// Host the connectivity monitor and print every state transition.
///
/// Each transition into `Connected` refreshes the document listing, since
/// anything fetched while disconnected may be stale or absent. Runs until
/// interrupted.
pub async fn watch(client: &ApiClient) -> Result<(), PapermindError> {
    let monitor = ConnectivityMonitor::start(client.clone());
    let mut states = monitor.subscribe();

    println!(
        "Watching backend connectivity at {} (Ctrl-C to stop)",
        client.base_url()
    );

    let mut previous = ConnectivityState::Unknown;

    loop {
        let current = *states.borrow_and_update();

        if current != previous {
            println!(
                "[{}] {}",
                format_rfc3339_seconds(SystemTime::now()),
                describe(current)
            );

            if current.is_connected() {
                match client.list_documents().await {
                    Ok(documents) => print_documents(&documents),
                    Err(e) => warn!("Refresh after reconnect failed: {e}"),
                }
            }

            previous = current;
        }

        if states.changed().await.is_err() {
            // Monitor task gone; nothing left to watch.
            return Ok(());
        }
    }
}

fn describe(state: ConnectivityState) -> &'static str {
    match state {
        ConnectivityState::Unknown => "checking...",
        ConnectivityState::Connected => "connected",
        ConnectivityState::Disconnected => "disconnected",
    }
}
