use serde::{Deserialize, Serialize};

/// One point-in-time reading of host metrics. Fields are stored exactly as
/// reported by the provider, without validation or normalization.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SystemSnapshot {
    pub os_name: String,
    pub os_version: String,
    pub cpu_name: String,
    pub cpu_cores: usize,
    pub cpu_usage: f32,
    pub total_memory: u64,
    pub used_memory: u64,
    pub free_memory: u64,
    pub total_disk: u64,
    pub used_disk: u64,
    pub free_disk: u64,
}
