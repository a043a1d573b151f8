//! The three persisted user-state entries.

use std::collections::BTreeMap;

use brief_model::Annotation;
use serde::de::DeserializeOwned;

use crate::backend::StorageBackend;
use crate::error::Result;
use crate::json::JsonStore;

/// Reading progress per document title, 0-100. Absent means unread.
pub type ProgressMap = BTreeMap<String, u8>;

/// Annotations per document title, in creation order.
pub type AnnotationMap = BTreeMap<String, Vec<Annotation>>;

const BOOKMARKS_KEY: &str = "bookmarks";
const PROGRESS_KEY: &str = "reading_progress";
const ANNOTATIONS_KEY: &str = "annotations";

/// Facade over the three independently-keyed durable entries.
///
/// Saves overwrite the whole stored value (write-through, no merge);
/// loads fall back to empty defaults per the [`JsonStore`] contract.
#[derive(Debug)]
pub struct UserStore<B: StorageBackend> {
    store: JsonStore<B>,
}

impl<B: StorageBackend> UserStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            store: JsonStore::new(backend),
        }
    }

    pub fn load_bookmarks(&self) -> Vec<String> {
        self.load(BOOKMARKS_KEY)
    }

    pub fn save_bookmarks(&self, bookmarks: &[String]) -> Result<()> {
        self.store.save(BOOKMARKS_KEY, &bookmarks)
    }

    pub fn load_progress(&self) -> ProgressMap {
        self.load(PROGRESS_KEY)
    }

    pub fn save_progress(&self, progress: &ProgressMap) -> Result<()> {
        self.store.save(PROGRESS_KEY, progress)
    }

    pub fn load_annotations(&self) -> AnnotationMap {
        self.load(ANNOTATIONS_KEY)
    }

    pub fn save_annotations(&self, annotations: &AnnotationMap) -> Result<()> {
        self.store.save(ANNOTATIONS_KEY, annotations)
    }

    fn load<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        self.store.load(key, T::default())
    }
}
