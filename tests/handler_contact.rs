mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_submit_valid_inquiry() {
    let server = common::test_server();

    let response = server
        .post("/api/contact")
        .json(&common::valid_inquiry())
        .await;

    response.assert_status(StatusCode::ACCEPTED);

    let json = response.json::<Value>();
    assert_eq!(json["status"], "received");
    assert!(json["reference"].as_str().unwrap().starts_with("INQ-"));
}

#[tokio::test]
async fn test_submit_without_phone() {
    let server = common::test_server();

    let mut inquiry = common::valid_inquiry();
    inquiry.as_object_mut().unwrap().remove("phone");

    let response = server.post("/api/contact").json(&inquiry).await;
    response.assert_status(StatusCode::ACCEPTED);
}

#[tokio::test]
async fn test_submit_invalid_inquiry() {
    let server = common::test_server();

    let response = server
        .post("/api/contact")
        .json(&json!({
            "name": "",
            "email": "not-an-email",
            "subject": "Quote request",
            "message": "Hello"
        }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["details"]["fields"]["name"], "Name is required");
    assert_eq!(
        json["error"]["details"]["fields"]["email"],
        "A valid email address is required"
    );
    assert!(json["error"]["details"]["fields"].get("subject").is_none());
}
