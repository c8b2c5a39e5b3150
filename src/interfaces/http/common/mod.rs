//! Shared HTTP building blocks: response envelope, request extractors and
//! error-to-status mapping.

mod api_json;
mod api_query;
mod error;

pub use api_json::{ApiJson, ApiJsonRejection};
pub use api_query::{ApiQuery, ApiQueryRejection};
pub use error::{booking_error_response, status_for, ErrorResponse};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Envelope for every JSON response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `true` when the request succeeded
    pub success: bool,
    /// Payload, `null` on failure
    pub data: Option<T>,
    /// Failure description, absent on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}
