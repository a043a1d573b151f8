//! Data directory and dataset resolution.

use std::path::PathBuf;

/// Environment variable overriding the persisted-state directory.
pub const DATA_DIR_ENV_VAR: &str = "BRIEFDESK_DATA_DIR";

/// Environment variable pointing at a dataset CSV to load.
pub const DATASET_ENV_VAR: &str = "BRIEFDESK_DATASET";

/// Resolve the persisted-state directory: explicit flag, then the
/// environment override, then `briefdesk/` under the platform data dir.
pub fn resolve_data_dir(flag: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = flag {
        return dir;
    }
    if let Ok(dir) = std::env::var(DATA_DIR_ENV_VAR) {
        return PathBuf::from(dir);
    }
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        return PathBuf::from(xdg).join("briefdesk");
    }
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("briefdesk");
    }
    PathBuf::from(".briefdesk")
}

/// Resolve the dataset path, if any: explicit flag, then the environment
/// override. `None` means the embedded demo dataset.
pub fn resolve_dataset(flag: Option<PathBuf>) -> Option<PathBuf> {
    flag.or_else(|| std::env::var(DATASET_ENV_VAR).ok().map(PathBuf::from))
}
