//! Room Rates Service
//!
//! Write path: draft -> before-change hooks -> validation -> store.
//! Hooks and validation run outside the store lock, so a rejected draft
//! never touches the stored document.

use std::sync::Arc;

use shared::models::{Operation, RoomRatesBlock, RoomRatesDocument, RoomRatesDraft, RoomRatesRelation};
use shared::rates::RateGrid;

use crate::db::repository::RoomRatesRepository;
use crate::hooks::HookPipeline;
use crate::utils::validation::validate_room_rates;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct RoomRatesService {
    repo: RoomRatesRepository,
    hooks: Arc<HookPipeline>,
}

impl RoomRatesService {
    pub fn new(repo: RoomRatesRepository, hooks: HookPipeline) -> Self {
        Self {
            repo,
            hooks: Arc::new(hooks),
        }
    }

    pub fn list(&self) -> Vec<RoomRatesDocument> {
        self.repo.find_all()
    }

    pub fn get(&self, year: i32) -> AppResult<RoomRatesDocument> {
        self.repo
            .find_by_year(year)
            .ok_or_else(|| AppError::room_rates_not_found(year))
    }

    pub fn create(&self, draft: RoomRatesDraft) -> AppResult<RoomRatesDocument> {
        let draft = self.hooks.run(draft, Operation::Create)?;
        let data = validate_room_rates(draft)?;
        let doc = self.repo.create(data)?;

        tracing::info!(
            id = doc.id,
            year = doc.year,
            room_types = doc.rates.len(),
            "Room rates created"
        );
        Ok(doc)
    }

    /// Replace the document of `year`
    ///
    /// Fields missing from the draft keep their stored values, so an upload
    /// alone is enough to refresh the rates.
    pub fn update(&self, year: i32, draft: RoomRatesDraft) -> AppResult<RoomRatesDocument> {
        let stored = self.get(year)?;
        let draft = self.hooks.run(draft.fill_from(&stored), Operation::Update)?;
        let data = validate_room_rates(draft)?;
        let doc = self.repo.replace(year, data)?;

        tracing::info!(
            id = doc.id,
            year = doc.year,
            room_types = doc.rates.len(),
            "Room rates updated"
        );
        Ok(doc)
    }

    pub fn delete(&self, year: i32) -> AppResult<RoomRatesDocument> {
        let stored = self.get(year)?;
        self.hooks
            .run(RoomRatesDraft::from_document(&stored), Operation::Delete)?;
        let doc = self.repo.delete(year)?;

        tracing::info!(id = doc.id, year = doc.year, "Room rates deleted");
        Ok(doc)
    }

    /// Merged-cell pricing grid of a stored document
    pub fn grid(&self, year: i32) -> AppResult<RateGrid> {
        Ok(RateGrid::for_document(&self.get(year)?))
    }

    /// Populate a block's id relation from the store
    ///
    /// Unknown ids leave the relation as is; rendering falls back to the
    /// placeholder.
    pub fn resolve_block(&self, mut block: RoomRatesBlock) -> RoomRatesBlock {
        if let RoomRatesRelation::Id(id) = block.room_rates {
            match self.repo.find_by_id(id) {
                Some(doc) => block.populate(doc),
                None => tracing::warn!(id, "Room rates block points at a missing document"),
            }
        }
        block
    }
}
