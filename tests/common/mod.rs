#![allow(dead_code)]

use axum::{Router, routing::get};
use axum_test::TestServer;
use serde_json::{Value, json};
use sqlx::PgPool;
use std::sync::Arc;
use url::Url;

use pass_in::api::handlers::health_handler;
use pass_in::api::routes::api_routes;
use pass_in::domain::identity::SequentialIdGenerator;
use pass_in::infrastructure::Repositories;
use pass_in::state::AppState;

pub const BASE_URL: &str = "https://pass-in.test/";

/// State over a fresh in-memory store with predictable ids ("id-1", "id-2", ...).
pub fn create_memory_state() -> AppState {
    AppState::new(
        Repositories::in_memory(),
        Arc::new(SequentialIdGenerator::new("id")),
        Url::parse(BASE_URL).ok(),
    )
}

/// Router with the API and health routes, without rate limiting.
pub fn create_test_app(state: AppState) -> Router {
    api_routes()
        .route("/health", get(health_handler))
        .with_state(state)
}

pub fn create_test_server() -> TestServer {
    TestServer::new(create_test_app(create_memory_state())).unwrap()
}

/// Creates an event through the API and returns its id.
pub async fn create_event(server: &TestServer, title: &str, slug: &str, max: Option<i32>) -> String {
    let response = server
        .post("/events")
        .json(&json!({
            "title": title,
            "slug": slug,
            "maximum_attendees": max
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["event"]["event_id"]
        .as_str()
        .unwrap()
        .to_string()
}

/// Registers an attendee through the API and returns the response.
pub async fn register(
    server: &TestServer,
    event_id: &str,
    name: &str,
    email: &str,
) -> axum_test::TestResponse {
    server
        .post(&format!("/events/{event_id}/attendees"))
        .json(&json!({ "name": name, "email": email }))
        .await
}

pub fn error_code(response: &axum_test::TestResponse) -> String {
    response.json::<Value>()["error"]["code"]
        .as_str()
        .unwrap()
        .to_string()
}

pub async fn insert_event(pool: &PgPool, id: &str, slug: &str, maximum_attendees: Option<i32>) {
    sqlx::query(
        "INSERT INTO events (id, title, slug, maximum_attendees) VALUES ($1, $2, $3, $4)",
    )
    .bind(id)
    .bind(format!("Event {slug}"))
    .bind(slug)
    .bind(maximum_attendees)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn insert_attendee(pool: &PgPool, id: &str, name: &str, email: &str, event_id: &str) {
    sqlx::query("INSERT INTO attendees (id, name, email, event_id) VALUES ($1, $2, $3, $4)")
        .bind(id)
        .bind(name)
        .bind(email)
        .bind(event_id)
        .execute(pool)
        .await
        .unwrap();
}
