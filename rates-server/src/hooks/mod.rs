//! Collection hooks
//!
//! Before-change hooks transform a draft before it is validated and stored.
//! Hooks run in registration order and the first error aborts the write.

mod room_rates;

pub use room_rates::ProcessJsonUpload;

use shared::models::{Operation, RoomRatesDraft};

use crate::utils::AppResult;

/// A transform applied to a draft before it reaches the store
pub trait BeforeChangeHook: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    fn before_change(&self, draft: RoomRatesDraft, operation: Operation)
    -> AppResult<RoomRatesDraft>;
}

/// Ordered list of before-change hooks for one collection
#[derive(Default)]
pub struct HookPipeline {
    hooks: Vec<Box<dyn BeforeChangeHook>>,
}

impl HookPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pipeline of the `room-rates` collection
    pub fn room_rates() -> Self {
        Self::new().with(ProcessJsonUpload)
    }

    pub fn with(mut self, hook: impl BeforeChangeHook + 'static) -> Self {
        self.hooks.push(Box::new(hook));
        self
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Run every hook in order
    pub fn run(&self, draft: RoomRatesDraft, operation: Operation) -> AppResult<RoomRatesDraft> {
        self.hooks.iter().try_fold(draft, |draft, hook| {
            tracing::trace!(hook = hook.name(), ?operation, "Running before-change hook");
            hook.before_change(draft, operation)
        })
    }
}

impl std::fmt::Debug for HookPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.hooks.iter().map(|h| h.name()))
            .finish()
    }
}
