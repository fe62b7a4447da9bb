//! Room Rates Repository
//!
//! In-memory document store keyed by year. Every write replaces the whole
//! document; nothing is persisted across restarts.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use parking_lot::RwLock;
use shared::models::{RoomRatesData, RoomRatesDocument};

use super::{RepoError, RepoResult};

#[derive(Debug, Default)]
struct Inner {
    docs: RwLock<BTreeMap<i32, RoomRatesDocument>>,
    next_id: AtomicI64,
}

#[derive(Debug, Clone, Default)]
pub struct RoomRatesRepository {
    inner: Arc<Inner>,
}

impl RoomRatesRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// All documents, ordered by year
    pub fn find_all(&self) -> Vec<RoomRatesDocument> {
        self.inner.docs.read().values().cloned().collect()
    }

    pub fn find_by_year(&self, year: i32) -> Option<RoomRatesDocument> {
        self.inner.docs.read().get(&year).cloned()
    }

    pub fn find_by_id(&self, id: i64) -> Option<RoomRatesDocument> {
        self.inner
            .docs
            .read()
            .values()
            .find(|doc| doc.id == id)
            .cloned()
    }

    /// Store a new document; fails if the year is taken
    pub fn create(&self, data: RoomRatesData) -> RepoResult<RoomRatesDocument> {
        let mut docs = self.inner.docs.write();
        if docs.contains_key(&data.year) {
            return Err(RepoError::Duplicate(data.year));
        }

        let now = shared::util::now_millis();
        let doc = RoomRatesDocument {
            id: self.inner.next_id.fetch_add(1, Ordering::Relaxed) + 1,
            year: data.year,
            seasons: data.seasons,
            rates: data.rates,
            created_at: now,
            updated_at: now,
        };
        docs.insert(doc.year, doc.clone());
        Ok(doc)
    }

    /// Replace the document of `year`; `data.year` may move it to a free year
    pub fn replace(&self, year: i32, data: RoomRatesData) -> RepoResult<RoomRatesDocument> {
        let mut docs = self.inner.docs.write();
        if data.year != year && docs.contains_key(&data.year) {
            return Err(RepoError::Duplicate(data.year));
        }
        let existing = docs.remove(&year).ok_or(RepoError::NotFound(year))?;

        let doc = RoomRatesDocument {
            id: existing.id,
            year: data.year,
            seasons: data.seasons,
            rates: data.rates,
            created_at: existing.created_at,
            updated_at: shared::util::now_millis(),
        };
        docs.insert(doc.year, doc.clone());
        Ok(doc)
    }

    pub fn delete(&self, year: i32) -> RepoResult<RoomRatesDocument> {
        self.inner
            .docs
            .write()
            .remove(&year)
            .ok_or(RepoError::NotFound(year))
    }
}
