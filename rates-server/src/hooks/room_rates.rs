//! Room rates collection hooks

use shared::models::{Operation, RoomRatesDraft};
use shared::rates::normalize_import;

use super::BeforeChangeHook;
use crate::utils::AppResult;

/// Replaces `seasons`/`rates` with the contents of `jsonUpload`
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessJsonUpload;

impl BeforeChangeHook for ProcessJsonUpload {
    fn name(&self) -> &'static str {
        "process_json_upload"
    }

    fn before_change(
        &self,
        draft: RoomRatesDraft,
        operation: Operation,
    ) -> AppResult<RoomRatesDraft> {
        normalize_import(draft, operation)
    }
}
