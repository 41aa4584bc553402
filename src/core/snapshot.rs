//! # Snapshot Persistence
//!
//! Saves the navigation path and modal state to `~/.waypoint/state.json`
//! on exit and reads it back on start when `restore` is enabled.
//!
//! The file is plain pretty-printed JSON:
//!
//! ```json
//! { "path": ["child_one", "child_two"], "modal": "dismissed" }
//! ```
//!
//! Destination names outside the closed set fail to parse, so a hand-edited
//! file can never smuggle an unknown screen into the router.

use log::{info, warn};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::core::router::Snapshot;

#[derive(Debug)]
pub enum SnapshotError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Io(e) => write!(f, "snapshot I/O error: {e}"),
            SnapshotError::Json(e) => write!(f, "snapshot format error: {e}"),
        }
    }
}

impl std::error::Error for SnapshotError {}

impl From<std::io::Error> for SnapshotError {
    fn from(e: std::io::Error) -> Self {
        SnapshotError::Io(e)
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(e: serde_json::Error) -> Self {
        SnapshotError::Json(e)
    }
}

/// Reads a snapshot. A missing file is `Ok(None)`.
pub fn load(path: &Path) -> Result<Option<Snapshot>, SnapshotError> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path)?;
    let snapshot: Snapshot = serde_json::from_str(&contents)?;
    info!(
        "Loaded navigation snapshot from {} (depth {})",
        path.display(),
        snapshot.path.len()
    );
    Ok(Some(snapshot))
}

/// Writes a snapshot, creating the parent directory if needed.
pub fn save(path: &Path, snapshot: &Snapshot) -> Result<(), SnapshotError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, json)?;
    info!("Saved navigation snapshot to {}", path.display());
    Ok(())
}

/// Like [`load`], but logs failures and falls back to an empty start.
pub fn load_or_default(path: &Path) -> Snapshot {
    match load(path) {
        Ok(snapshot) => snapshot.unwrap_or_default(),
        Err(e) => {
            warn!("Ignoring saved navigation at {}: {}", path.display(), e);
            Snapshot::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::destination::Destination::*;
    use crate::core::router::ModalState;

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");
        let snapshot = Snapshot {
            path: vec![ChildOne, ChildTwo],
            modal: ModalState::Presented,
        };

        save(&path, &snapshot).unwrap();
        assert_eq!(load(&path).unwrap(), Some(snapshot));
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load(&dir.path().join("state.json")).unwrap(), None);
    }

    #[test]
    fn test_unknown_destination_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, r#"{ "path": ["child_one", "settings"] }"#).unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, SnapshotError::Json(_)));
        assert_eq!(load_or_default(&path), Snapshot::default());
    }

    #[test]
    fn test_garbage_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "not json").unwrap();
        assert_eq!(load_or_default(&path), Snapshot::default());
    }
}
