//! API router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::http::HeaderValue;
use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::BookingService;
use crate::config::CorsConfig;

use super::modules::bookings::dto::{BookingDto, CancelledBookingDto, CreateBookingRequest};
use super::modules::{bookings, health, rooms};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        rooms::list_rooms,
        bookings::list_bookings,
        bookings::create_booking,
        bookings::cancel_booking,
    ),
    components(schemas(
        CreateBookingRequest,
        BookingDto,
        CancelledBookingDto,
        health::HealthResponse,
    )),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Rooms", description = "Bookable rooms"),
        (name = "Bookings", description = "Create, list and cancel bookings")
    ),
    info(
        title = "Room Booking API",
        description = "Book fixed rooms in whole-hour-aligned slots of limited length."
    )
)]
pub struct ApiDoc;

/// CORS from the configured origin list; `"*"` allows any origin.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.allowed_origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}

/// Create the API router
pub fn create_api_router(service: Arc<BookingService>, cors: &CorsConfig) -> Router {
    let room_routes = Router::new()
        .route("/rooms", get(rooms::list_rooms))
        .with_state(rooms::RoomAppState {
            service: service.clone(),
        });

    let booking_routes = Router::new()
        .route("/bookings/{room}", get(bookings::list_bookings))
        .route("/book", post(bookings::create_booking))
        .route("/cancel/{code}", delete(bookings::cancel_booking))
        .with_state(bookings::BookingAppState {
            service: service.clone(),
        });

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health::HealthState {
            service,
            started_at: Arc::new(Instant::now()),
        });

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .merge(health_routes)
        .merge(room_routes)
        .merge(booking_routes)
        .layer(cors_layer(cors))
        .layer(TraceLayer::new_for_http())
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::{TimeZone, Utc};
    use serde_json::{json, Value};

    use crate::domain::{frozen_clock, BookingPolicy, RoomRegistry};

    /// now = 2024-06-01T10:00:00Z
    fn app() -> Router {
        let service = BookingService::new(
            RoomRegistry::default(),
            BookingPolicy::default(),
            frozen_clock(Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap()),
        );
        create_api_router(Arc::new(service), &CorsConfig::default())
    }

    async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
        use tower::Service;
        let mut svc = app.clone().into_service();
        let resp = svc.call(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn book(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/book")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    fn cancel(code: &str) -> Request<Body> {
        Request::builder()
            .method("DELETE")
            .uri(format!("/cancel/{}", code))
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn lists_rooms() {
        let (status, body) = send(&app(), get("/rooms")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"], json!(["Room A", "Room B", "Room C"]));
    }

    #[tokio::test]
    async fn book_list_cancel_flow() {
        let app = app();

        let (status, body) = send(
            &app,
            book(json!({
                "room": "Room A",
                "start": "2024-06-01T11:00:00Z",
                "end": "2024-06-01T12:00:00Z"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["room"], "Room A");
        assert_eq!(body["data"]["start"], "2024-06-01T11:00:00Z");
        let code = body["data"]["code"].as_str().unwrap().to_string();

        let (status, body) = send(&app, get("/bookings/Room%20A")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"][0]["code"], code.as_str());

        let (status, body) = send(&app, cancel(&code)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["room"], "Room A");
        assert_eq!(body["data"]["end"], "2024-06-01T12:00:00Z");

        let (_, body) = send(&app, get("/bookings/Room%20A")).await;
        assert_eq!(body["data"], json!([]));

        let (status, body) = send(&app, cancel(&code)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Invalid cancellation code");
    }

    #[tokio::test]
    async fn naive_timestamps_are_utc() {
        let (status, body) = send(
            &app(),
            book(json!({
                "room": "Room B",
                "start": "2024-06-01T11:00:00",
                "end": "2024-06-01T12:00:00"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["start"], "2024-06-01T11:00:00Z");
    }

    #[tokio::test]
    async fn unknown_room_is_404() {
        let (status, body) = send(
            &app(),
            book(json!({
                "room": "Room Z",
                "start": "2024-06-01T11:00:00Z",
                "end": "2024-06-01T12:00:00Z"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn rule_violations_are_400() {
        let app = app();
        let cases = [
            ("2024-06-01T12:00:00Z", "2024-06-01T11:00:00Z", "Start time must be before end time"),
            ("2024-06-01T11:00:00Z", "2024-06-01T15:00:00Z", "Booking cannot be longer than 3 hours"),
            ("2024-06-01T08:00:00Z", "2024-06-01T09:00:00Z", "Cannot book a time that has already passed"),
            ("2024-06-01T11:30:00Z", "2024-06-01T12:00:00Z", "Start time must be at the beginning of the hour"),
        ];

        for (start, end, message) in cases {
            let (status, body) = send(
                &app,
                book(json!({ "room": "Room A", "start": start, "end": end })),
            )
            .await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{start} - {end}");
            assert_eq!(body["error"], message);
        }
    }

    #[tokio::test]
    async fn overlapping_booking_is_400_and_adjacent_is_ok() {
        let app = app();
        let first = json!({
            "room": "Room A",
            "start": "2024-06-01T11:00:00Z",
            "end": "2024-06-01T12:00:00Z"
        });
        assert_eq!(send(&app, book(first.clone())).await.0, StatusCode::OK);

        let (status, body) = send(&app, book(first)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Room Room A is already booked for that time slot");

        let adjacent = json!({
            "room": "Room A",
            "start": "2024-06-01T12:00:00Z",
            "end": "2024-06-01T13:00:00Z"
        });
        assert_eq!(send(&app, book(adjacent)).await.0, StatusCode::OK);
    }

    #[tokio::test]
    async fn bad_timestamp_is_400() {
        let (status, body) = send(
            &app(),
            book(json!({ "room": "Room A", "start": "tomorrow", "end": "2024-06-01T12:00:00Z" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid start"));
    }

    #[tokio::test]
    async fn bookings_can_be_filtered_by_date() {
        let app = app();
        for (start, end) in [
            ("2024-06-01T11:00:00Z", "2024-06-01T12:00:00Z"),
            ("2024-06-04T11:00:00Z", "2024-06-04T12:00:00Z"),
        ] {
            let (status, _) = send(
                &app,
                book(json!({ "room": "Room C", "start": start, "end": end })),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
        }

        let (_, body) = send(
            &app,
            get("/bookings/Room%20C?start_date=2024-06-02&end_date=2024-06-04"),
        )
        .await;
        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0]["start"], "2024-06-04T11:00:00Z");
    }

    #[tokio::test]
    async fn malformed_date_filter_is_400_envelope() {
        let (status, body) = send(&app(), get("/bookings/Room%20A?start_date=garbage")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert!(body["data"].is_null());
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid query parameters"));
    }

    #[tokio::test]
    async fn unknown_room_listing_is_empty() {
        let (status, body) = send(&app(), get("/bookings/Nowhere")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], json!([]));
    }

    #[tokio::test]
    async fn health_reports_counts() {
        let (status, body) = send(&app(), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["rooms"], 3);
        assert_eq!(body["active_bookings"], 0);
    }

    #[test]
    fn openapi_lists_booking_paths() {
        let doc = ApiDoc::openapi();
        for path in ["/rooms", "/bookings/{room}", "/book", "/cancel/{code}", "/health"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
