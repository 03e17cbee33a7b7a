use serde::{Deserialize, Serialize};

use crate::{service::models::ServiceStatus, snapshot::models::SystemSnapshot};

/// State owned by one poller. `latest` survives failures so consumers keep a
/// last-known-good snapshot through transient errors.
#[derive(Clone, Debug)]
pub struct PollerState {
    pub latest: Option<SystemSnapshot>,
    pub loading: bool,
    pub last_error: Option<String>,
}

impl Default for PollerState {
    fn default() -> Self {
        PollerState {
            latest: None,
            loading: true,
            last_error: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Status {
    pub status: u8,
    pub loading: bool,
    pub last_error: Option<String>,
    pub latest: Option<SystemSnapshot>,
}

impl From<PollerState> for Status {
    fn from(state: PollerState) -> Self {
        let status = if state.loading {
            ServiceStatus::Starting
        } else if state.last_error.is_some() {
            ServiceStatus::Error
        } else if state.latest.is_some() {
            ServiceStatus::Active
        } else {
            ServiceStatus::NotActive
        };

        Status {
            status: status.value(),
            loading: state.loading,
            last_error: state.last_error,
            latest: state.latest,
        }
    }
}
