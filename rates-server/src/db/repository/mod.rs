//! Repository Module
//!
//! Document stores behind the collection services.

pub mod room_rates;

pub use room_rates::RoomRatesRepository;

use shared::AppError;
use thiserror::Error;

/// Repository error types (keyed by document year)
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(i32),

    #[error("Duplicate: {0}")]
    Duplicate(i32),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(year) => AppError::room_rates_not_found(year),
            RepoError::Duplicate(year) => AppError::year_exists(year),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
