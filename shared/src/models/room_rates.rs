//! Room Rates Document Model
//!
//! One document per year. The whole rate tree is replaced on every save.

use serde::{Deserialize, Serialize};

use super::room_rate::RoomRateEntry;
use super::season::SeasonDefinition;

/// Write operation a draft is being prepared for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Create or update
    pub fn is_write(&self) -> bool {
        matches!(self, Operation::Create | Operation::Update)
    }
}

/// Raw JSON upload attached to a draft
///
/// Editors paste either a JSON-encoded string or an already-structured object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JsonUpload {
    Text(String),
    Value(serde_json::Value),
}

/// Persisted room rates document
///
/// Store metadata defaults to 0 when a document arrives inline, e.g. a
/// populated block relation carrying only `year`, `seasons` and `rates`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomRatesDocument {
    #[serde(default)]
    pub id: i64,
    pub year: i32,
    pub seasons: SeasonDefinition,
    pub rates: Vec<RoomRateEntry>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

/// In-progress document state handed to the before-change hooks
///
/// `seasons` and `rates` are optional here because a JSON upload may supply
/// them; validation after the hooks requires both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomRatesDraft {
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(
        default,
        rename = "jsonUpload",
        alias = "json_upload",
        skip_serializing_if = "Option::is_none"
    )]
    pub json_upload: Option<JsonUpload>,
    #[serde(default)]
    pub seasons: Option<SeasonDefinition>,
    #[serde(default)]
    pub rates: Option<Vec<RoomRateEntry>>,
}

impl RoomRatesDraft {
    /// Draft carrying the stored state of a document
    pub fn from_document(doc: &RoomRatesDocument) -> Self {
        Self {
            year: Some(doc.year),
            json_upload: None,
            seasons: Some(doc.seasons.clone()),
            rates: Some(doc.rates.clone()),
        }
    }

    /// Fill fields the editor left out with the stored values
    pub fn fill_from(mut self, stored: &RoomRatesDocument) -> Self {
        self.year.get_or_insert(stored.year);
        if self.seasons.is_none() {
            self.seasons = Some(stored.seasons.clone());
        }
        if self.rates.is_none() {
            self.rates = Some(stored.rates.clone());
        }
        self
    }
}

/// Draft that passed the hooks and validation, ready to be stored
#[derive(Debug, Clone, PartialEq)]
pub struct RoomRatesData {
    pub year: i32,
    pub seasons: SeasonDefinition,
    pub rates: Vec<RoomRateEntry>,
}
