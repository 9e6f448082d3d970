#![allow(dead_code)]

use axum::{Router, routing::get};
use axum_test::TestServer;
use scientific_square::api;
use scientific_square::api::handlers::health_handler;
use scientific_square::config::Config;
use scientific_square::state::AppState;
use scientific_square::web;
use serde_json::{Value, json};

/// State built from the built-in catalog and content, carousels idle.
pub fn create_test_state() -> AppState {
    AppState::new(&Config::default())
}

/// The full route tree without the rate limiter, which needs a peer address.
pub fn test_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest(
            "/api",
            api::routes::public_routes().merge(api::routes::form_routes()),
        )
        .merge(web::routes::public_routes())
        .merge(web::routes::form_routes())
        .with_state(state)
}

pub fn test_server() -> TestServer {
    TestServer::new(test_router(create_test_state())).unwrap()
}

pub fn valid_inquiry() -> Value {
    json!({
        "name": "Asha Rao",
        "email": "asha@example.com",
        "phone": "+91 98765 43210",
        "subject": "Quote request",
        "message": "Please share pricing for the PTS-10."
    })
}
