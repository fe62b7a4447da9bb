//! JSON Import Normalizer
//!
//! Pre-commit transform for room rates drafts: when the editor attached a
//! JSON upload, its `seasons`/`rates` replace the structured fields and the
//! upload itself is dropped before the document is stored.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::models::{JsonUpload, Operation, RoomRateEntry, RoomRatesDraft, SeasonDefinition};

/// Recognised top-level keys of an uploaded payload; anything else is ignored
#[derive(Debug, Default, Deserialize)]
pub struct ImportPayload {
    #[serde(default)]
    pub seasons: Option<SeasonDefinition>,
    #[serde(default)]
    pub rates: Option<Vec<RoomRateEntry>>,
}

impl ImportPayload {
    /// Parse an upload, either raw text or an already-structured value
    pub fn parse(upload: JsonUpload) -> AppResult<Self> {
        let value = match upload {
            JsonUpload::Text(text) => serde_json::from_str::<Value>(&text)
                .map_err(|e| AppError::invalid_format(e.to_string()))?,
            JsonUpload::Value(value) => value,
        };

        if value.is_null() {
            return Err(AppError::invalid_format("upload is null"));
        }

        // Other scalars and arrays carry no seasons/rates
        if !value.is_object() {
            return Ok(Self::default());
        }

        serde_json::from_value(value).map_err(|e| AppError::invalid_format(e.to_string()))
    }
}

/// Apply the JSON upload of a draft, if any
///
/// - Delete operations and drafts without an upload pass through unchanged.
/// - An empty text upload counts as no upload.
/// - Parse or shape errors fail with `InvalidFormat`; the caller must abort
///   the save.
pub fn normalize_import(mut draft: RoomRatesDraft, operation: Operation) -> AppResult<RoomRatesDraft> {
    if !operation.is_write() {
        return Ok(draft);
    }

    let upload = match draft.json_upload.take() {
        None => return Ok(draft),
        Some(JsonUpload::Text(text)) if text.trim().is_empty() => return Ok(draft),
        Some(upload) => upload,
    };

    let payload = ImportPayload::parse(upload).inspect_err(|e| {
        tracing::warn!(year = ?draft.year, error = %e, "Rejected room rates JSON upload");
    })?;

    tracing::debug!(
        year = ?draft.year,
        has_seasons = payload.seasons.is_some(),
        rate_entries = payload.rates.as_ref().map(Vec::len),
        "Applying room rates JSON upload"
    );

    if let Some(seasons) = payload.seasons {
        draft.seasons = Some(seasons);
    }
    if let Some(rates) = payload.rates {
        draft.rates = Some(rates);
    }

    Ok(draft)
}
