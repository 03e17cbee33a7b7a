use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use sysinfo::{Disks, System};
use thiserror::Error;

use crate::snapshot::models::SystemSnapshot;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("{0}")]
    System(String),
    #[error("Snapshot task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// The native metrics collaborator: one operation, one failure type.
#[async_trait]
pub trait MetricsProvider: Send + Sync {
    async fn system_snapshot(&self) -> Result<SystemSnapshot, SnapshotError>;
}

/// sysinfo-backed provider. The `System` is kept across calls so CPU usage
/// is measured against the previous refresh instead of always reading zero.
pub struct SysinfoProvider {
    system: Arc<Mutex<System>>,
}

impl Default for SysinfoProvider {
    fn default() -> Self {
        SysinfoProvider {
            system: Arc::new(Mutex::new(System::new())),
        }
    }
}

#[async_trait]
impl MetricsProvider for SysinfoProvider {
    async fn system_snapshot(&self) -> Result<SystemSnapshot, SnapshotError> {
        let system = self.system.clone();
        tokio::task::spawn_blocking(move || collect(&system)).await?
    }
}

fn collect(system: &Mutex<System>) -> Result<SystemSnapshot, SnapshotError> {
    let mut sys = match system.lock() {
        Ok(system) => system,
        Err(e) => {
            return Err(SnapshotError::System(format!(
                "Error getting system info: {}",
                e
            )))
        }
    };
    sys.refresh_all();

    let os_name = System::name().unwrap_or_else(|| "Unknown".to_string());
    let os_version = System::os_version().unwrap_or_else(|| "Unknown".to_string());

    let cpu_name = sys
        .cpus()
        .first()
        .map(|cpu| cpu.brand().to_string())
        .unwrap_or_else(|| "Unknown".to_string());
    let cpu_cores = sys.cpus().len();
    let cpu_usage = sys.global_cpu_usage();

    let total_memory = sys.total_memory();
    let used_memory = sys.used_memory();
    let free_memory = total_memory - used_memory;

    let disks = Disks::new_with_refreshed_list();
    let mut total_disk: u64 = 0;
    let mut free_disk: u64 = 0;
    for disk in disks.list() {
        total_disk += disk.total_space();
        free_disk += disk.available_space();
    }
    let used_disk = total_disk - free_disk;

    Ok(SystemSnapshot {
        os_name,
        os_version,
        cpu_name,
        cpu_cores,
        cpu_usage,
        total_memory,
        used_memory,
        free_memory,
        total_disk,
        used_disk,
        free_disk,
    })
}

#[cfg(test)]
mod tests {
    use super::{MetricsProvider, SysinfoProvider};

    #[tokio::test]
    async fn collects_a_populated_snapshot() {
        let provider = SysinfoProvider::default();
        let snapshot = provider
            .system_snapshot()
            .await
            .expect("snapshot collection failed");

        assert!(!snapshot.os_name.is_empty());
        assert!(snapshot.cpu_cores > 0);
        assert!(snapshot.total_memory > 0);
        assert_eq!(
            snapshot.free_memory,
            snapshot.total_memory - snapshot.used_memory
        );
        assert_eq!(snapshot.used_disk, snapshot.total_disk - snapshot.free_disk);
    }
}
