//! Room Rates API Handlers

use axum::{
    Json,
    extract::{Path, State},
    response::Html,
};
use shared::models::{RoomRatesDocument, RoomRatesDraft};
use shared::rates::RateGrid;

use crate::core::ServerState;
use crate::utils::{ApiResponse, AppResult};

pub async fn list(State(state): State<ServerState>) -> ApiResponse<Vec<RoomRatesDocument>> {
    ApiResponse::success(state.room_rates.list())
}

pub async fn create(
    State(state): State<ServerState>,
    Json(draft): Json<RoomRatesDraft>,
) -> AppResult<ApiResponse<RoomRatesDocument>> {
    let doc = state.room_rates.create(draft)?;
    Ok(ApiResponse::success(doc))
}

pub async fn get_by_year(
    State(state): State<ServerState>,
    Path(year): Path<i32>,
) -> AppResult<ApiResponse<RoomRatesDocument>> {
    Ok(ApiResponse::success(state.room_rates.get(year)?))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(year): Path<i32>,
    Json(draft): Json<RoomRatesDraft>,
) -> AppResult<ApiResponse<RoomRatesDocument>> {
    let doc = state.room_rates.update(year, draft)?;
    Ok(ApiResponse::success(doc))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(year): Path<i32>,
) -> AppResult<ApiResponse<RoomRatesDocument>> {
    let doc = state.room_rates.delete(year)?;
    Ok(ApiResponse::success(doc))
}

pub async fn grid(
    State(state): State<ServerState>,
    Path(year): Path<i32>,
) -> AppResult<ApiResponse<RateGrid>> {
    Ok(ApiResponse::success(state.room_rates.grid(year)?))
}

pub async fn table(
    State(state): State<ServerState>,
    Path(year): Path<i32>,
) -> AppResult<Html<String>> {
    let grid = state.room_rates.grid(year)?;
    Ok(Html(state.renderer.render(&grid)))
}
