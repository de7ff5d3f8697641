// Sequenced fetching
//
// Every filter change issues a new request. Requests carry an increasing
// sequence number; issuing one aborts whatever is still in flight, and the
// consumer only applies outcomes whose sequence is the latest issued.

use std::sync::Arc;
use std::time::Instant;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::client::MetricsSource;
use crate::errors::Result;
use crate::metrics;
use crate::payload::{DataQuery, Payload};

#[derive(Debug)]
pub struct FetchOutcome {
    pub seq: u64,
    pub query: DataQuery,
    pub result: Result<Payload>,
}

pub struct Fetcher {
    source: Arc<dyn MetricsSource>,
    runtime: Handle,
    latest: u64,
    in_flight: Option<JoinHandle<()>>,
    tx: mpsc::UnboundedSender<FetchOutcome>,
}

impl Fetcher {
    pub fn new(
        source: Arc<dyn MetricsSource>,
        runtime: Handle,
    ) -> (Self, mpsc::UnboundedReceiver<FetchOutcome>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let fetcher = Self {
            source,
            runtime,
            latest: 0,
            in_flight: None,
            tx,
        };
        (fetcher, rx)
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Start a fetch for `query`, cancelling the previous one. Returns the
    /// sequence number its outcome will carry.
    pub fn request(&mut self, query: DataQuery) -> u64 {
        if let Some(handle) = self.in_flight.take() {
            if !handle.is_finished() {
                debug!("Aborting in-flight fetch #{}", self.latest);
                handle.abort();
            }
        }

        self.latest += 1;
        let seq = self.latest;
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();

        self.in_flight = Some(self.runtime.spawn(async move {
            let started = Instant::now();
            let result = source.fetch(&query).await;
            metrics::record_fetch(
                source.name(),
                result.is_ok(),
                started.elapsed().as_secs_f64(),
            );
            // Receiver gone means the dashboard is shutting down.
            let _ = tx.send(FetchOutcome { seq, query, result });
        }));

        seq
    }

    pub fn latest(&self) -> u64 {
        self.latest
    }

    pub fn is_current(&self, outcome: &FetchOutcome) -> bool {
        outcome.seq == self.latest
    }

    /// Pass through the outcome of the latest request, drop anything older.
    pub fn accept(&self, outcome: FetchOutcome) -> Option<FetchOutcome> {
        if self.is_current(&outcome) {
            Some(outcome)
        } else {
            debug!(
                "Dropping stale fetch #{} (latest is #{})",
                outcome.seq, self.latest
            );
            metrics::record_stale();
            None
        }
    }
}

impl Drop for Fetcher {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}
