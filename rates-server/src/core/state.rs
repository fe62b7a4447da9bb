//! Server state
//!
//! Cloned into every request handler. All fields are cheap to clone.

use std::sync::Arc;

use crate::core::Config;
use crate::db::repository::RoomRatesRepository;
use crate::hooks::HookPipeline;
use crate::render::RateTableRenderer;
use crate::services::RoomRatesService;

#[derive(Debug, Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub room_rates: RoomRatesService,
    pub renderer: RateTableRenderer,
}

impl ServerState {
    pub fn new(config: Config, room_rates: RoomRatesService) -> Self {
        Self {
            config: Arc::new(config),
            room_rates,
            renderer: RateTableRenderer::new(),
        }
    }

    /// Build the state with an empty store and the default hooks
    pub fn initialize(config: &Config) -> Self {
        let hooks = HookPipeline::room_rates();
        tracing::debug!(?hooks, "Room rates collection ready");
        let service = RoomRatesService::new(RoomRatesRepository::new(), hooks);
        Self::new(config.clone(), service)
    }
}
