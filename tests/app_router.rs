mod common;

use std::net::SocketAddr;

use axum::body::{Body, to_bytes};
use axum::extract::ConnectInfo;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use scientific_square::routes::app_router;
use tower::ServiceExt;

const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

fn peer() -> ConnectInfo<SocketAddr> {
    ConnectInfo(SocketAddr::from(([127, 0, 0, 1], 40_000)))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .extension(peer())
        .body(Body::empty())
        .unwrap()
}

fn contact_form() -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/contact")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .extension(peer())
        .body(Body::from(
            "name=Asha+Rao&email=asha%40example.com&phone=&subject=Quote&message=Pricing+please",
        ))
        .unwrap()
}

fn contact_json() -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .extension(peer())
        .body(Body::from(common::valid_inquiry().to_string()))
        .unwrap()
}

async fn text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_pages_and_health() {
    let app = app_router(common::create_test_state(), STATIC_DIR);

    for uri in ["/", "/about", "/contact", "/news-events", "/health"] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
    }
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let app = app_router(common::create_test_state(), STATIC_DIR);

    let response = app
        .oneshot(get("/products/detail/?product=electrolyzer-test-stations"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(text(response).await.contains("The PTS-1 is a precision test station"));
}

#[tokio::test]
async fn test_static_assets_served() {
    let app = app_router(common::create_test_state(), STATIC_DIR);

    let response = app.clone().oneshot(get("/static/css/site.css")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/static/missing.css")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_contact_form_is_rate_limited() {
    let app = app_router(common::create_test_state(), STATIC_DIR);

    for attempt in 0..5 {
        let response = app.clone().oneshot(contact_form()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "POST #{attempt}");
    }

    let response = app.clone().oneshot(contact_form()).await.unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    // Reading the page is not limited.
    let response = app.oneshot(get("/contact")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_contact_api_is_rate_limited() {
    let app = app_router(common::create_test_state(), STATIC_DIR);

    for attempt in 0..5 {
        let response = app.clone().oneshot(contact_json()).await.unwrap();
        assert_eq!(response.status(), StatusCode::ACCEPTED, "POST #{attempt}");
    }

    let response = app.oneshot(contact_json()).await.unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
}
