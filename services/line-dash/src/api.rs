// services/line-dash/src/api.rs
//
// Feeds the dashboard from a MetricsSource: issues a fetch for the current
// filters and applies only the newest outcome to the state

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, error::TryRecvError};
use tracing::{info, warn};

use linekit::config::TrackingConfig;
use linekit::{DataQuery, FetchOutcome, Fetcher, MetricsSource};

use crate::state::DashboardState;

pub struct DataFeed {
    fetcher: Fetcher,
    outcomes: mpsc::UnboundedReceiver<FetchOutcome>,
    tracking: TrackingConfig,
}

impl DataFeed {
    pub fn new(source: Arc<dyn MetricsSource>, runtime: Handle, tracking: TrackingConfig) -> Self {
        let (fetcher, outcomes) = Fetcher::new(source, runtime);
        Self {
            fetcher,
            outcomes,
            tracking,
        }
    }

    pub fn source_name(&self) -> &str {
        self.fetcher.source_name()
    }

    pub fn query_for(&self, state: &DashboardState) -> DataQuery {
        DataQuery::new(&self.tracking, state.shift(), state.date)
    }

    /// Fetch for the current filters. Anything still in flight is superseded.
    pub fn refresh(&mut self, state: &mut DashboardState) {
        let query = self.query_for(state);
        let seq = self.fetcher.request(query);
        info!(
            "Fetch #{} from {}: {} / {}",
            seq,
            self.fetcher.source_name(),
            state.shift(),
            state.date
        );
        state.add_log(
            "INFO",
            &format!("Loading {} / {}...", state.shift(), state.date),
        );
        state.begin_fetch(seq);
    }

    /// Apply whatever outcomes have arrived since the last tick.
    pub fn poll(&mut self, state: &mut DashboardState) {
        loop {
            match self.outcomes.try_recv() {
                Ok(outcome) => {
                    if let Some(outcome) = self.fetcher.accept(outcome) {
                        if let Err(e) = &outcome.result {
                            warn!("Fetch #{} failed: {}", outcome.seq, e);
                        }
                        state.apply_outcome(outcome, &self.tracking);
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    warn!("Fetch channel closed");
                    break;
                }
            }
        }
    }
}
