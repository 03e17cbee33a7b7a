use std::{
    sync::{Arc, Mutex, RwLock},
    time::Duration,
};

use tokio::{
    task::JoinHandle,
    time::{interval, MissedTickBehavior},
};

use crate::{
    monitor::models::{PollerState, Status},
    snapshot::provider::MetricsProvider,
    utils::{error::ResponseError, format::format_bytes},
};

const GENERIC_FETCH_ERROR: &str = "Failed to fetch system info";

/// Keeps a best-effort, periodically refreshed snapshot of host metrics.
/// Fetch failures are stored as a message and never stop the refresh timer;
/// a previously fetched snapshot stays available through them.
pub struct Poller {
    inner: Arc<Inner>,
    timer: Mutex<Option<JoinHandle<()>>>,
}

struct Inner {
    provider: Arc<dyn MetricsProvider>,
    state: RwLock<PollerState>,
}

impl Poller {
    pub fn new(provider: Arc<dyn MetricsProvider>) -> Self {
        Poller {
            inner: Arc::new(Inner {
                provider,
                state: RwLock::new(PollerState::default()),
            }),
            timer: Mutex::new(None),
        }
    }

    /// Creation hook: one immediate fetch, then the recurring refresh.
    pub async fn spawn(provider: Arc<dyn MetricsProvider>, poll_interval: Duration) -> Self {
        let poller = Poller::new(provider);
        poller.fetch_now().await;
        poller.start_auto_refresh(poll_interval);
        poller
    }

    /// Issues one query to the metrics provider and stores the outcome.
    /// Overlapping calls are allowed; whichever completes last wins. Nothing
    /// the provider does can escape this method as a panic or error.
    pub async fn fetch_now(&self) {
        self.inner.fetch().await;
    }

    /// Starts the recurring refresh. A no-op if a timer is already active;
    /// a zero interval is rejected and no timer is started.
    pub fn start_auto_refresh(&self, poll_interval: Duration) {
        if poll_interval.is_zero() {
            log::error!("Refusing to start auto refresh with a zero interval");
            return;
        }

        let mut timer = match self.timer.lock() {
            Ok(timer) => timer,
            Err(e) => {
                log::error!("Could not access refresh timer: {}", e);
                return;
            }
        };
        if timer.is_some() {
            return;
        }

        // Weak so the background task never keeps the poller state alive.
        let inner = Arc::downgrade(&self.inner);
        *timer = Some(tokio::spawn(async move {
            let mut ticker = interval(poll_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately; the creation hook already
            // performed the initial fetch.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                match inner.upgrade() {
                    Some(inner) => inner.fetch().await,
                    None => break,
                }
            }
        }));
    }

    /// Cancels future refreshes. An in-flight fetch still completes and
    /// writes its result. A no-op if no timer is active.
    pub fn stop_auto_refresh(&self) {
        match self.timer.lock() {
            Ok(mut timer) => {
                if let Some(handle) = timer.take() {
                    handle.abort();
                }
            }
            Err(e) => {
                log::error!("Could not access refresh timer: {}", e);
            }
        }
    }

    pub fn status(&self) -> Result<Status, ResponseError> {
        self.inner
            .state
            .read()
            .map(|state| Status::from(state.clone()))
            .map_err(|e| ResponseError::new(format!("Error reading poller state: {}", e)))
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.stop_auto_refresh();
    }
}

impl Inner {
    async fn fetch(&self) {
        let result = self.provider.system_snapshot().await;

        // The lock is only taken after the fetch settled, so it is never
        // held across an await point.
        let mut state = match self.state.write() {
            Ok(state) => state,
            Err(e) => {
                log::error!("Could not store fetch result: {}", e);
                return;
            }
        };
        state.loading = false;
        match result {
            Ok(snapshot) => {
                log::debug!(
                    "Fetched snapshot: cpu {:.1}%, memory {} of {}",
                    snapshot.cpu_usage,
                    format_bytes(snapshot.used_memory),
                    format_bytes(snapshot.total_memory)
                );
                state.latest = Some(snapshot);
                state.last_error = None;
            }
            Err(e) => {
                let mut message = e.to_string();
                if message.is_empty() {
                    message = GENERIC_FETCH_ERROR.to_string();
                }
                log::warn!("Error fetching system info: {}", message);
                state.last_error = Some(message);
            }
        }
    }
}
