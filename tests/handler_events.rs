mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_create_event_success() {
    let server = common::create_test_server();

    let response = server
        .post("/events")
        .json(&json!({
            "title": "Tech Summit",
            "slug": "tech-summit",
            "details": "Two days of talks",
            "maximum_attendees": 2
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<Value>();
    assert_eq!(json["event"]["event_id"], "id-1");
    assert_eq!(json["event"]["title"], "Tech Summit");
    assert_eq!(json["event"]["slug"], "tech-summit");
    assert_eq!(json["event"]["details"], "Two days of talks");
    assert_eq!(json["event"]["maximum_attendees"], 2);
}

#[tokio::test]
async fn test_create_event_without_limit() {
    let server = common::create_test_server();

    let response = server
        .post("/events")
        .json(&json!({ "title": "Open Day", "slug": "open-day" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert!(response.json::<Value>()["event"]["maximum_attendees"].is_null());
}

#[tokio::test]
async fn test_create_event_short_title() {
    let server = common::create_test_server();

    let response = server
        .post("/events")
        .json(&json!({ "title": "TS", "slug": "tech-summit" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(common::error_code(&response), "validation_error");

    let json = response.json::<Value>();
    let message = json["error"]["message"].as_str().unwrap();
    assert!(message.contains("at least 3 characters"));
}

#[tokio::test]
async fn test_create_event_missing_title() {
    let server = common::create_test_server();

    let response = server
        .post("/events")
        .json(&json!({ "slug": "tech-summit" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(common::error_code(&response), "validation_error");
}

#[tokio::test]
async fn test_create_event_non_positive_limit() {
    let server = common::create_test_server();

    let response = server
        .post("/events")
        .json(&json!({
            "title": "Tech Summit",
            "slug": "tech-summit",
            "maximum_attendees": 0
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_event_duplicate_slug() {
    let server = common::create_test_server();
    common::create_event(&server, "Tech Summit", "tech-summit", None).await;

    let response = server
        .post("/events")
        .json(&json!({ "title": "Another Summit", "slug": "tech-summit" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(common::error_code(&response), "event_already_exists");
}

#[tokio::test]
async fn test_event_detail_with_attendee_amount() {
    let server = common::create_test_server();
    let event_id = common::create_event(&server, "Tech Summit", "tech-summit", Some(2)).await;
    common::register(&server, &event_id, "Ana Silva", "ana@example.com").await;

    let response = server.get(&format!("/events/{event_id}")).await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["event"]["event_id"], event_id);
    assert_eq!(json["event"]["attendee_amount"], 1);
    assert_eq!(json["event"]["maximum_attendees"], 2);
}

#[tokio::test]
async fn test_event_detail_not_found() {
    let server = common::create_test_server();

    let response = server.get("/events/missing").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(common::error_code(&response), "event_not_found");
}

#[tokio::test]
async fn test_event_list_newest_first() {
    let server = common::create_test_server();
    common::create_event(&server, "Rust Meetup", "rust-meetup", None).await;
    common::create_event(&server, "Tech Summit", "tech-summit", None).await;

    let response = server.get("/events").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["quantity"], 2);
    assert_eq!(json["page_offset"], 0);
    let events = json["events"].as_array().unwrap();
    assert_eq!(events[0]["title"], "Tech Summit");
    assert_eq!(events[1]["title"], "Rust Meetup");
    assert!(events[0].get("attendee_amount").is_none());
}

#[tokio::test]
async fn test_event_list_filter_and_pagination() {
    let server = common::create_test_server();
    for i in 0..12 {
        common::create_event(&server, &format!("Summit {i}"), &format!("summit-{i}"), None).await;
    }
    common::create_event(&server, "Rust Meetup", "rust-meetup", None).await;

    let first = server
        .get("/events")
        .add_query_param("query", "SUMMIT")
        .await
        .json::<Value>();
    assert_eq!(first["quantity"], 10);

    let second = server
        .get("/events")
        .add_query_param("query", "summit")
        .add_query_param("page_offset", "1")
        .await
        .json::<Value>();
    assert_eq!(second["quantity"], 2);
    assert_eq!(second["page_offset"], 1);
}

#[tokio::test]
async fn test_event_list_invalid_page_offset() {
    let server = common::create_test_server();

    let response = server
        .get("/events")
        .add_query_param("page_offset", "abc")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}
