//! Background dataset feed.
//!
//! One thread, one bounded wait, one dataset handed to the simulation over
//! a channel. No retry: if the service does not answer in time the fixed
//! local table goes out instead, and the status cell flips to offline. A
//! user-triggered refresh spawns a fresh worker; nothing loops here.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::Sender;
use orrery_engine::Dataset;
use serde_json::Value;

use crate::fetch::{fetch_json, FeedOutcome};
use crate::horizon;
use crate::local;
use crate::status::{FeedStatus, StatusCell};

/// Handle to a running feed worker.
pub struct FeedHandle {
    /// Live status for the UI panel.
    pub status: Arc<StatusCell>,
    join: JoinHandle<()>,
}

impl FeedHandle {
    /// Wait for the worker to finish. It finishes after sending exactly
    /// one dataset (or after failing to send because the receiver closed).
    pub fn join(self) {
        if self.join.join().is_err() {
            log::error!("dataset feed worker panicked");
        }
    }
}

/// Spawn the dataset feed.
///
/// With an endpoint, the worker GETs it with the given deadline and parses
/// the payload as a dataset. Without one, the mocked ephemerides feed
/// answers. Either way the simulation receives exactly one dataset: the
/// fetched one on success, the fixed local table on timeout or failure.
pub fn spawn_dataset_feed(
    endpoint: Option<String>,
    deadline: Duration,
    tx: Sender<Dataset>,
) -> FeedHandle {
    let status = Arc::new(StatusCell::new(FeedStatus::Connecting));
    let cell = Arc::clone(&status);

    let join = thread::spawn(move || {
        let outcome = match &endpoint {
            Some(url) => fetch_json(url, deadline).map(parse_dataset),
            None => horizon::fetch_mock(deadline).map(Ok),
        };

        let dataset = match outcome {
            FeedOutcome::Fetched(Ok(dataset)) => {
                cell.set(FeedStatus::Connected);
                dataset
            }
            FeedOutcome::Fetched(Err(e)) => {
                log::warn!("dataset feed: payload not a dataset: {e}");
                cell.set(FeedStatus::Offline);
                local::fallback_dataset()
            }
            FeedOutcome::TimedOut => {
                log::warn!("dataset feed: no answer within {deadline:?}, using local table");
                cell.set(FeedStatus::Offline);
                local::fallback_dataset()
            }
            FeedOutcome::Failed(reason) => {
                log::warn!("dataset feed: {reason}, using local table");
                cell.set(FeedStatus::Offline);
                local::fallback_dataset()
            }
        };

        if tx.send(dataset).is_err() {
            log::debug!("dataset feed: receiver gone, dropping dataset");
        }
    });

    FeedHandle { status, join }
}

fn parse_dataset(payload: Value) -> Result<Dataset, serde_json::Error> {
    serde_json::from_value(payload)
}
