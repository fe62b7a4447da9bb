//! Rates Server - seasonal room rates for lodge pages
//!
//! # Architecture
//!
//! A `room-rates` collection with one document per year. Writes pass
//! through before-change hooks (JSON upload import) and validation before
//! they reach the in-memory store. Stored documents are served as JSON, as
//! a merged-cell pricing grid, or as a rendered HTML table.
//!
//! # Module layout
//!
//! ```text
//! rates-server/src/
//! ├── core/        # config, state, server, errors
//! ├── api/         # HTTP routes and handlers
//! ├── services/    # collection operations
//! ├── hooks/       # before-change hooks
//! ├── db/          # document store
//! ├── render/      # HTML table rendering
//! └── utils/       # logging, validation
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod hooks;
pub mod render;
pub mod services;
pub mod utils;

pub use core::{Config, Server, ServerState};
pub use render::RateTableRenderer;
pub use services::RoomRatesService;
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env` and install the logger
///
/// Returns the loaded configuration.
pub fn setup_environment() -> anyhow::Result<Config> {
    // A missing .env is fine; real deployments set the variables directly.
    let dotenv_loaded = dotenv::dotenv().is_ok();

    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    if !dotenv_loaded {
        tracing::debug!("No .env file found, using process environment");
    }
    Ok(config)
}
