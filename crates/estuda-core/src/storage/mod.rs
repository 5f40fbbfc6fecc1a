mod config;
mod store;

pub use config::Config;
pub use store::{LiveState, Snapshot, Store};

use std::path::PathBuf;

use crate::error::StoreError;

/// Returns `~/.config/estuda[-dev]/` based on ESTUDA_ENV.
///
/// Set ESTUDA_ENV=dev to use a development data directory, or point
/// ESTUDA_DATA_DIR at an explicit location.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, StoreError> {
    let dir = if let Ok(explicit) = std::env::var("ESTUDA_DATA_DIR") {
        PathBuf::from(explicit)
    } else {
        let base_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config");
        let env = std::env::var("ESTUDA_ENV").unwrap_or_else(|_| "production".to_string());
        if env == "dev" {
            base_dir.join("estuda-dev")
        } else {
            base_dir.join("estuda")
        }
    };

    std::fs::create_dir_all(&dir).map_err(|e| StoreError::DataDirUnavailable(e.to_string()))?;
    Ok(dir)
}
