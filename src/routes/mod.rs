// src/routes/mod.rs
pub mod ask;

use crate::error::AppError;
use crate::state::SharedState;
use ask::ask_handler;
use axum::{
    Router,
    http::{Method, StatusCode, header},
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    // Contract headers for the browser client: any origin, POST + preflight.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route(
            "/api/ask",
            post(ask_handler)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

// Bare OPTIONS without preflight headers bypasses the CORS layer; answer it
// with an empty 200 as well.
async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
