//! Per-document metadata snapshot export.
//!
//! Produces the downloadable artifact for one document: its source
//! metadata plus the user's current progress and annotations, serialized
//! as pretty JSON and named from the sanitized document title.

use std::fs;
use std::path::{Path, PathBuf};

use brief_model::{Annotation, DocumentRecord, Priority};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to {operation} export file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize snapshot for '{title}'")]
    Serialize {
        title: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ExportError>;

/// Everything the artifact carries for one document. Serialized with
/// camelCase keys, the convention of the artifact format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSnapshot {
    pub title: String,
    pub summary: String,
    pub audience: Vec<String>,
    pub key_takeaway: String,
    pub action_required: String,
    pub priority: Priority,
    pub dependencies: String,
    pub reading_progress: u8,
    pub annotations: Vec<Annotation>,
    pub exported_at: DateTime<Utc>,
}

/// Assemble a snapshot from the document and its current user state.
pub fn snapshot(
    doc: &DocumentRecord,
    reading_progress: u8,
    annotations: &[Annotation],
    exported_at: DateTime<Utc>,
) -> DocumentSnapshot {
    DocumentSnapshot {
        title: doc.title.clone(),
        summary: doc.summary.clone(),
        audience: doc.audience.clone(),
        key_takeaway: doc.key_takeaway.clone(),
        action_required: doc.action_required.clone(),
        priority: doc.priority,
        dependencies: doc.dependencies.to_string(),
        reading_progress,
        annotations: annotations.to_vec(),
        exported_at,
    }
}

/// Reduce a document title to a plain artifact file stem: path-hostile
/// characters are dropped, whitespace runs collapse to single
/// underscores.
pub fn sanitize_title(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .filter(|c| !matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|') && !c.is_control())
        .collect();
    let stem = cleaned.split_whitespace().collect::<Vec<_>>().join("_");
    if stem.is_empty() {
        "document".to_string()
    } else {
        stem
    }
}

/// Write the snapshot under `dir` as `<sanitized title>_metadata.json`.
/// Returns the artifact path.
pub fn write_snapshot(dir: &Path, snapshot: &DocumentSnapshot) -> Result<PathBuf> {
    let json = serde_json::to_string_pretty(snapshot).map_err(|e| ExportError::Serialize {
        title: snapshot.title.clone(),
        source: e,
    })?;

    fs::create_dir_all(dir).map_err(|e| ExportError::Io {
        operation: "create directory for",
        path: dir.to_path_buf(),
        source: e,
    })?;

    let path = dir.join(format!("{}_metadata.json", sanitize_title(&snapshot.title)));
    fs::write(&path, json).map_err(|e| ExportError::Io {
        operation: "write",
        path: path.clone(),
        source: e,
    })?;

    tracing::info!(path = %path.display(), "exported document snapshot");
    Ok(path)
}
