mod common;

use axum::http::StatusCode;
use serde_json::Value;

async fn registered_attendee(server: &axum_test::TestServer) -> String {
    let event_id = common::create_event(server, "Tech Summit", "tech-summit", None).await;
    let response = common::register(server, &event_id, "Ana Silva", "ana@example.com").await;
    response.json::<Value>()["attendee"]["attendee_id"]
        .as_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_check_in_success() {
    let server = common::create_test_server();
    let attendee_id = registered_attendee(&server).await;

    let response = server
        .post(&format!("/attendees/{attendee_id}/check-in"))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<Value>();
    assert_eq!(json["check_in"]["attendee_id"], attendee_id);
    assert_eq!(json["check_in"]["check_in_id"], 1);
}

#[tokio::test]
async fn test_check_in_twice() {
    let server = common::create_test_server();
    let attendee_id = registered_attendee(&server).await;
    let path = format!("/attendees/{attendee_id}/check-in");

    server.post(&path).await.assert_status(StatusCode::CREATED);
    let response = server.post(&path).await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(common::error_code(&response), "already_checked_in");
}

#[tokio::test]
async fn test_check_in_unknown_attendee() {
    let server = common::create_test_server();

    let response = server.post("/attendees/missing/check-in").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(common::error_code(&response), "attendee_not_found");
}

#[tokio::test]
async fn test_check_in_visible_in_attendee_list() {
    let server = common::create_test_server();
    let attendee_id = registered_attendee(&server).await;
    server
        .post(&format!("/attendees/{attendee_id}/check-in"))
        .await
        .assert_status(StatusCode::CREATED);

    let list = server.get("/events/id-1/attendees").await.json::<Value>();

    assert!(list["attendees"][0]["checked_in_at"].is_string());
}
