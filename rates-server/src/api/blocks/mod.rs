//! Page block rendering
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/blocks/room-rates/render | POST | Render a room rates block |

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/blocks/room-rates/render", post(handler::render_room_rates))
}
