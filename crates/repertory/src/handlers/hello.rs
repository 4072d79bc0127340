use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
};

/// Fixed greeting body, byte for byte.
pub const HELLO_BODY: &str = r#"{"message": "Hello from Repertory API!"}"#;

/// Greeting (GET / and GET /hello).
///
/// Always 200 with a JSON body. The CORS header is set here rather than by
/// the CORS layer so it is present on requests without an `Origin`.
#[axum::debug_handler]
pub async fn hello() -> impl IntoResponse {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/json"),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        ],
        HELLO_BODY,
    )
}
