use dsmc_core::{Particle, SimConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Complete simulation state for save/resume
#[derive(Debug, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub config: SimConfig,
    pub step_count: u64,
    pub particles: Vec<Particle>,
}

/// Persistence failures: filesystem or encoding.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("snapshot I/O: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot encoding: {0}")]
    Encode(#[from] bincode::Error),
}

/// Save a snapshot to disk as bincode, creating parent directories.
pub fn save_snapshot(snapshot: &SimSnapshot, path: &Path) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let data = bincode::serialize(snapshot)?;
    fs::write(path, data)?;
    Ok(())
}

/// Load a snapshot from disk.
pub fn load_snapshot(path: &Path) -> Result<SimSnapshot, StorageError> {
    let data = fs::read(path)?;
    let snapshot = bincode::deserialize(&data)?;
    Ok(snapshot)
}
