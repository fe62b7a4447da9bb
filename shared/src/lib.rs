//! Shared types for the room rates service
//!
//! Data models, error types, response structures and the pure room rates
//! logic (JSON import normalization, rate grid layout).

pub mod error;
pub mod models;
pub mod rates;
pub mod util;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use serde::{Deserialize, Serialize};
