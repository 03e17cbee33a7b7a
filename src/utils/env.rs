use std::{
    env::var,
    path::{Path, PathBuf},
};

use log::{error, warn};

fn env_var(id: &str) -> Option<String> {
    var(id)
        .inspect_err(|e| {
            warn!("Could not read env var {}: {}", id, e);
        })
        .ok()
}

pub fn hostname() -> String {
    env_var("HOSTNAME").unwrap_or("0.0.0.0".to_string())
}

pub fn port() -> String {
    env_var("PORT").unwrap_or("34590".to_string())
}

pub fn datadir() -> PathBuf {
    env_var("DATADIR")
        .map(|d| Path::new(&d).to_path_buf())
        .unwrap_or(Path::new("/var/lib/sysmon-agent").to_path_buf())
}

pub fn pollinterval() -> u64 {
    env_var("POLL_INTERVAL")
        .and_then(|s| {
            str::parse::<u64>(&s)
                .inspect_err(|e| {
                    error!("Could not parse POLL_INTERVAL to u64: {}", e);
                })
                .ok()
        })
        .unwrap_or(5000)
}
