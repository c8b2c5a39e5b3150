//! Room HTTP handlers

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::application::BookingService;
use crate::interfaces::http::common::ApiResponse;

#[derive(Clone)]
pub struct RoomAppState {
    pub service: Arc<BookingService>,
}

#[utoipa::path(
    get,
    path = "/rooms",
    tag = "Rooms",
    responses(
        (status = 200, description = "Bookable rooms in registry order", body = ApiResponse<Vec<String>>)
    )
)]
pub async fn list_rooms(State(state): State<RoomAppState>) -> Json<ApiResponse<Vec<String>>> {
    Json(ApiResponse::success(state.service.list_rooms().to_vec()))
}
