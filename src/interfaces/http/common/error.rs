//! Booking failures as HTTP responses

use axum::http::StatusCode;
use axum::Json;

use super::ApiResponse;
use crate::domain::BookingError;

pub type ErrorResponse<T> = (StatusCode, Json<ApiResponse<T>>);

/// Missing rooms and unknown codes are 404, every other rejection is 400.
pub fn status_for(err: &BookingError) -> StatusCode {
    if err.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::BAD_REQUEST
    }
}

pub fn booking_error_response<T>(err: BookingError) -> ErrorResponse<T> {
    (status_for(&err), Json(ApiResponse::error(err.to_string())))
}
