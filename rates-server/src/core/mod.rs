//! Core server components
//!
//! - [`Config`]: environment configuration
//! - [`ServerState`]: shared application state
//! - [`Server`]: HTTP listener lifecycle
//! - [`ServerError`]: start-up errors

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::Config;
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::ServerState;
