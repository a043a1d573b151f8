//! Write-through manager for per-document user state.

use brief_model::Annotation;
use brief_store::{AnnotationMap, ProgressMap, Result, StorageBackend, UserStore};
use chrono::Utc;

/// Progress floor applied when a document is opened externally. Opening
/// never decreases progress.
pub const OPEN_PROGRESS_FLOOR: u8 = 10;

/// Owns the in-memory mirrors of bookmarks, reading progress, and
/// annotations, and the durable store behind them.
///
/// The mirrors are the single source of truth during a session; every
/// mutation persists the whole updated structure before it commits to
/// memory, so a failed save leaves both sides on the previous value.
#[derive(Debug)]
pub struct Workbench<B: StorageBackend> {
    store: UserStore<B>,
    bookmarks: Vec<String>,
    progress: ProgressMap,
    annotations: AnnotationMap,
}

impl<B: StorageBackend> Workbench<B> {
    /// Open the workbench, reading prior state from the backend. Missing
    /// or corrupt entries come back empty per the store contract.
    pub fn open(backend: B) -> Self {
        let store = UserStore::new(backend);
        let bookmarks = store.load_bookmarks();
        let progress = store.load_progress();
        let annotations = store.load_annotations();
        Self {
            store,
            bookmarks,
            progress,
            annotations,
        }
    }

    pub fn bookmarks(&self) -> &[String] {
        &self.bookmarks
    }

    pub fn is_bookmarked(&self, title: &str) -> bool {
        self.bookmarks.iter().any(|b| b == title)
    }

    /// Reading progress for a document; absent means 0/unread.
    pub fn progress(&self, title: &str) -> u8 {
        self.progress.get(title).copied().unwrap_or(0)
    }

    pub fn progress_map(&self) -> &ProgressMap {
        &self.progress
    }

    pub fn annotations(&self, title: &str) -> &[Annotation] {
        self.annotations.get(title).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Flip bookmark membership for a title; returns the new membership.
    pub fn toggle_bookmark(&mut self, title: &str) -> Result<bool> {
        let mut updated = self.bookmarks.clone();
        let added = match updated.iter().position(|b| b == title) {
            Some(idx) => {
                updated.remove(idx);
                false
            }
            None => {
                updated.push(title.to_string());
                true
            }
        };
        self.store.save_bookmarks(&updated)?;
        self.bookmarks = updated;
        tracing::debug!(title, bookmarked = added, "bookmark toggled");
        Ok(added)
    }

    /// Set reading progress, clamping to 0-100. Returns the stored value.
    pub fn set_progress(&mut self, title: &str, value: i64) -> Result<u8> {
        let clamped = value.clamp(0, 100) as u8;
        let mut updated = self.progress.clone();
        updated.insert(title.to_string(), clamped);
        self.store.save_progress(&updated)?;
        self.progress = updated;
        Ok(clamped)
    }

    /// Raise progress to `floor` if it is currently below; never
    /// decreases. Returns the effective value.
    pub fn bump_progress_floor(&mut self, title: &str, floor: u8) -> Result<u8> {
        let floor = floor.min(100);
        let current = self.progress(title);
        if current >= floor {
            return Ok(current);
        }
        self.set_progress(title, i64::from(floor))
    }

    /// Append an annotation and return the stored entry.
    ///
    /// Ids are epoch milliseconds, bumped past the newest existing id so
    /// they stay unique and monotonic even within one millisecond.
    pub fn add_annotation(&mut self, title: &str, text: &str, author: &str) -> Result<Annotation> {
        let now = Utc::now();
        let last_id = self
            .annotations
            .values()
            .flatten()
            .map(|a| a.id)
            .max()
            .unwrap_or(0);
        let id = now.timestamp_millis().max(last_id + 1);
        let annotation = Annotation::new(id, text, now, author);

        let mut updated = self.annotations.clone();
        updated
            .entry(title.to_string())
            .or_default()
            .push(annotation.clone());
        self.store.save_annotations(&updated)?;
        self.annotations = updated;
        Ok(annotation)
    }

    /// Remove one annotation by id. Returns false, not an error, when the
    /// id is not present.
    pub fn delete_annotation(&mut self, title: &str, id: i64) -> Result<bool> {
        let Some(list) = self.annotations.get(title) else {
            return Ok(false);
        };
        let Some(idx) = list.iter().position(|a| a.id == id) else {
            return Ok(false);
        };

        let mut updated = self.annotations.clone();
        if let Some(list) = updated.get_mut(title) {
            list.remove(idx);
        }
        self.store.save_annotations(&updated)?;
        self.annotations = updated;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brief_store::MemoryBackend;

    fn workbench() -> Workbench<MemoryBackend> {
        Workbench::open(MemoryBackend::new())
    }

    #[test]
    fn test_toggle_bookmark_twice_restores_membership() {
        let mut bench = workbench();
        assert!(bench.toggle_bookmark("Doc").unwrap());
        assert!(bench.is_bookmarked("Doc"));
        assert!(!bench.toggle_bookmark("Doc").unwrap());
        assert!(!bench.is_bookmarked("Doc"));
    }

    #[test]
    fn test_bookmark_order_is_insertion_order() {
        let mut bench = workbench();
        bench.toggle_bookmark("B").unwrap();
        bench.toggle_bookmark("A").unwrap();
        assert_eq!(bench.bookmarks(), ["B", "A"]);
    }

    #[test]
    fn test_set_progress_clamps() {
        let mut bench = workbench();
        assert_eq!(bench.set_progress("Doc", 150).unwrap(), 100);
        assert_eq!(bench.set_progress("Doc", -5).unwrap(), 0);
        assert_eq!(bench.set_progress("Doc", 45).unwrap(), 45);
        assert_eq!(bench.progress("Doc"), 45);
    }

    #[test]
    fn test_bump_progress_floor_never_decreases() {
        let mut bench = workbench();
        assert_eq!(bench.bump_progress_floor("Doc", OPEN_PROGRESS_FLOOR).unwrap(), 10);
        bench.set_progress("Doc", 50).unwrap();
        assert_eq!(bench.bump_progress_floor("Doc", OPEN_PROGRESS_FLOOR).unwrap(), 50);
        assert_eq!(bench.progress("Doc"), 50);
    }

    #[test]
    fn test_annotation_ids_strictly_increase() {
        let mut bench = workbench();
        let first = bench.add_annotation("Doc", "first", "Current User").unwrap().id;
        let second = bench.add_annotation("Doc", "second", "Current User").unwrap().id;
        let third = bench.add_annotation("Other", "third", "Current User").unwrap().id;
        assert!(second > first);
        assert!(third > second);
    }

    #[test]
    fn test_delete_annotation_unknown_id_is_noop() {
        let mut bench = workbench();
        bench.add_annotation("Doc", "keep me", "Current User").unwrap();
        assert!(!bench.delete_annotation("Doc", 1).unwrap());
        assert!(!bench.delete_annotation("Other", 1).unwrap());
        assert_eq!(bench.annotations("Doc").len(), 1);
    }

    #[test]
    fn test_delete_annotation_by_id() {
        let mut bench = workbench();
        let id = bench.add_annotation("Doc", "remove me", "Current User").unwrap().id;
        bench.add_annotation("Doc", "keep me", "Current User").unwrap();
        assert!(bench.delete_annotation("Doc", id).unwrap());
        let remaining = bench.annotations("Doc");
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].text, "keep me");
    }

    #[test]
    fn test_state_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut bench = Workbench::open(brief_store::FsBackend::new(dir.path()));
            bench.toggle_bookmark("Doc").unwrap();
            bench.set_progress("Doc", 30).unwrap();
            bench.add_annotation("Doc", "note", "Current User").unwrap();
        }
        let bench = Workbench::open(brief_store::FsBackend::new(dir.path()));
        assert!(bench.is_bookmarked("Doc"));
        assert_eq!(bench.progress("Doc"), 30);
        assert_eq!(bench.annotations("Doc").len(), 1);
    }
}
