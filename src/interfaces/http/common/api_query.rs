//! Query-string extractor that reports malformed parameters inside the API
//! envelope, the way [`ApiJson`](super::ApiJson) does for bodies.

use axum::extract::rejection::QueryRejection;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;

use super::ApiResponse;

pub struct ApiQuery<T>(pub T);

pub struct ApiQueryRejection(QueryRejection);

impl IntoResponse for ApiQueryRejection {
    fn into_response(self) -> Response {
        let body =
            ApiResponse::<()>::error(format!("Invalid query parameters: {}", self.0.body_text()));
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiQueryRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(ApiQueryRejection)?;
        Ok(ApiQuery(value))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use axum::routing::get;
    use axum::Router;
    use chrono::NaiveDate;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct DayQuery {
        day: Option<NaiveDate>,
    }

    async fn handler(ApiQuery(query): ApiQuery<DayQuery>) -> String {
        query.day.map(|d| d.to_string()).unwrap_or_default()
    }

    async fn send(uri: &str) -> (StatusCode, axum::body::Bytes) {
        use tower::Service;
        let mut svc = Router::new().route("/test", get(handler)).into_service();
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let resp = svc.call(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes)
    }

    #[tokio::test]
    async fn valid_query_is_extracted() {
        let (status, bytes) = send("/test?day=2024-06-01").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(&bytes[..], b"2024-06-01");
    }

    #[tokio::test]
    async fn absent_optional_parameter_is_fine() {
        let (status, _) = send("/test").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn malformed_parameter_returns_400_envelope() {
        let (status, bytes) = send("/test?day=garbage").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid query parameters"));
    }
}
