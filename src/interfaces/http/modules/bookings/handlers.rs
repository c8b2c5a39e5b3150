//! Booking HTTP handlers
//!
//! Handlers only translate between HTTP and the booking service; every
//! business rule lives in the service.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::application::BookingService;
use crate::domain::{DateRange, Timestamp};
use crate::interfaces::http::common::{
    booking_error_response, ApiJson, ApiQuery, ApiResponse, ErrorResponse,
};

use super::dto::*;

#[derive(Clone)]
pub struct BookingAppState {
    pub service: Arc<BookingService>,
}

fn parse_timestamp(field: &str, raw: &str) -> Result<Timestamp, ErrorResponse<BookingDto>> {
    raw.parse::<Timestamp>().map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(format!("Invalid {}: {}", field, e))),
        )
    })
}

#[utoipa::path(
    get,
    path = "/bookings/{room}",
    tag = "Bookings",
    params(
        ("room" = String, Path, description = "Room identifier"),
        BookingsQuery
    ),
    responses(
        (status = 200, description = "Bookings of the room in creation order", body = ApiResponse<Vec<BookingDto>>),
        (status = 400, description = "Malformed date filter")
    )
)]
pub async fn list_bookings(
    State(state): State<BookingAppState>,
    Path(room): Path<String>,
    ApiQuery(query): ApiQuery<BookingsQuery>,
) -> Json<ApiResponse<Vec<BookingDto>>> {
    let range = DateRange::new(query.start_date, query.end_date);
    let bookings = state
        .service
        .list_bookings(&room, Some(range))
        .into_iter()
        .map(BookingDto::from)
        .collect();

    Json(ApiResponse::success(bookings))
}

#[utoipa::path(
    post,
    path = "/book",
    tag = "Bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 200, description = "Booking created", body = ApiResponse<BookingDto>),
        (status = 400, description = "Request breaks a booking rule or is malformed"),
        (status = 404, description = "Room not found")
    )
)]
pub async fn create_booking(
    State(state): State<BookingAppState>,
    ApiJson(request): ApiJson<CreateBookingRequest>,
) -> Result<Json<ApiResponse<BookingDto>>, ErrorResponse<BookingDto>> {
    let start = parse_timestamp("start", &request.start)?;
    let end = parse_timestamp("end", &request.end)?;

    let booking = state
        .service
        .create_booking(&request.room, start, end)
        .map_err(booking_error_response::<BookingDto>)?;

    Ok(Json(ApiResponse::success(booking.into())))
}

#[utoipa::path(
    delete,
    path = "/cancel/{code}",
    tag = "Bookings",
    params(("code" = String, Path, description = "Cancellation code issued at booking")),
    responses(
        (status = 200, description = "Booking cancelled", body = ApiResponse<CancelledBookingDto>),
        (status = 404, description = "Invalid cancellation code")
    )
)]
pub async fn cancel_booking(
    State(state): State<BookingAppState>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<CancelledBookingDto>>, ErrorResponse<CancelledBookingDto>> {
    let cancelled = state
        .service
        .cancel_booking(&code)
        .map_err(booking_error_response::<CancelledBookingDto>)?;

    Ok(Json(ApiResponse::success(cancelled.into())))
}
