//! Block API Handlers

use axum::{Json, extract::State, response::Html};
use shared::models::RoomRatesBlock;

use crate::core::ServerState;

/// Render a block; an id relation is looked up in the store first
pub async fn render_room_rates(
    State(state): State<ServerState>,
    Json(block): Json<RoomRatesBlock>,
) -> Html<String> {
    let block = state.room_rates.resolve_block(block);
    Html(state.renderer.render_block(&block))
}
