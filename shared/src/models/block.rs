//! Room Rates Block Model
//!
//! Page block that displays one room rates document.

use serde::{Deserialize, Serialize};

use super::room_rates::RoomRatesDocument;
use crate::error::{AppError, AppResult, ErrorCode};

/// Relationship to a room rates document
///
/// Unpopulated relations carry only the document id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoomRatesRelation {
    Id(i64),
    Populated(Box<RoomRatesDocument>),
}

/// Room rates page block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRatesBlock {
    /// Optional id for in-page navigation links (e.g. `rates-section`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor_id: Option<String>,
    pub room_rates: RoomRatesRelation,
}

impl RoomRatesBlock {
    /// The populated document, or `RoomRatesRelationUnresolved`
    pub fn document(&self) -> AppResult<&RoomRatesDocument> {
        match &self.room_rates {
            RoomRatesRelation::Populated(doc) => Ok(&**doc),
            RoomRatesRelation::Id(id) => Err(AppError::new(
                ErrorCode::RoomRatesRelationUnresolved,
            )
            .with_detail("id", *id)),
        }
    }

    /// Replace an id relation with the document it points to
    pub fn populate(&mut self, doc: RoomRatesDocument) {
        self.room_rates = RoomRatesRelation::Populated(Box::new(doc));
    }
}
