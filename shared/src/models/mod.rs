//! Data models
//!
//! Shared between rates-server and the site frontend (via API).
//! Document ids are `i64`, timestamps are Unix millis.

pub mod block;
pub mod room_rate;
pub mod room_rates;
pub mod season;

// Re-exports
pub use block::*;
pub use room_rate::*;
pub use room_rates::*;
pub use season::*;
