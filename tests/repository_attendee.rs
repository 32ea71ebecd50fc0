mod common;

use chrono::Utc;
use sqlx::PgPool;
use std::sync::Arc;

use pass_in::AppError;
use pass_in::domain::entities::Attendee;
use pass_in::domain::repositories::{AttendeeRepository, PAGE_SIZE};
use pass_in::infrastructure::persistence::PgAttendeeRepository;

fn attendee(id: &str, name: &str, email: &str, event_id: &str) -> Attendee {
    Attendee::new(
        id.to_string(),
        name.to_string(),
        email.to_string(),
        event_id.to_string(),
        Utc::now(),
        None,
    )
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_create_attendee(pool: PgPool) {
    common::insert_event(&pool, "evt-1", "tech-summit", Some(2)).await;
    let repo = PgAttendeeRepository::new(Arc::new(pool));

    let created = repo
        .create(attendee("att-1", "Ana Silva", "ana@example.com", "evt-1"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(created.id, "att-1");
    assert_eq!(created.event_id, "evt-1");
    assert!(created.checked_in_at.is_none());
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_create_attendee_duplicate_email(pool: PgPool) {
    common::insert_event(&pool, "evt-1", "tech-summit", None).await;
    let repo = PgAttendeeRepository::new(Arc::new(pool));
    repo.create(attendee("att-1", "Ana Silva", "ana@example.com", "evt-1"))
        .await
        .unwrap();

    let result = repo
        .create(attendee("att-2", "Ana Souza", "ana@example.com", "evt-1"))
        .await;

    assert!(matches!(
        result.unwrap_err(),
        AppError::AttendeeAlreadyExists { .. }
    ));
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_create_attendee_sold_out(pool: PgPool) {
    common::insert_event(&pool, "evt-1", "tech-summit", Some(1)).await;
    let repo = PgAttendeeRepository::new(Arc::new(pool));
    repo.create(attendee("att-1", "Ana Silva", "ana@example.com", "evt-1"))
        .await
        .unwrap();

    let result = repo
        .create(attendee("att-2", "Bruno Lima", "bruno@example.com", "evt-1"))
        .await;

    assert!(matches!(result.unwrap_err(), AppError::EventSoldOut { .. }));
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_create_attendee_unknown_event(pool: PgPool) {
    let repo = PgAttendeeRepository::new(Arc::new(pool));

    let result = repo
        .create(attendee("att-1", "Ana Silva", "ana@example.com", "missing"))
        .await;

    assert!(matches!(result.unwrap_err(), AppError::EventNotFound { .. }));
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_get_by_id_includes_check_in(pool: PgPool) {
    common::insert_event(&pool, "evt-1", "tech-summit", None).await;
    common::insert_attendee(&pool, "att-1", "Ana Silva", "ana@example.com", "evt-1").await;
    sqlx::query("INSERT INTO check_ins (attendee_id) VALUES ('att-1')")
        .execute(&pool)
        .await
        .unwrap();

    let repo = PgAttendeeRepository::new(Arc::new(pool));
    let found = repo.get_by_id("att-1").await.unwrap().unwrap();

    assert!(found.checked_in_at.is_some());
    assert!(repo.get_by_id("missing").await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_list_and_count_by_event(pool: PgPool) {
    common::insert_event(&pool, "evt-1", "tech-summit", None).await;
    common::insert_attendee(&pool, "att-1", "Ana Lima", "ana@example.com", "evt-1").await;
    common::insert_attendee(&pool, "att-2", "Carla Dias", "carla@example.com", "evt-1").await;
    common::insert_attendee(&pool, "att-3", "Bruno Lima", "bruno@example.com", "evt-1").await;

    let repo = PgAttendeeRepository::new(Arc::new(pool));

    let all = repo.list_by_event("evt-1", "", 0).await.unwrap();
    let names: Vec<&str> = all.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Carla Dias", "Bruno Lima", "Ana Lima"]);

    let filtered = repo.list_by_event("evt-1", "LIMA", 0).await.unwrap();
    assert_eq!(filtered.len(), 2);
    assert_eq!(repo.count_by_event("evt-1", "lima").await.unwrap(), 2);
    assert_eq!(repo.count_by_event("evt-1", "").await.unwrap(), 3);
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_list_by_event_pages(pool: PgPool) {
    common::insert_event(&pool, "evt-1", "tech-summit", None).await;
    for i in 0..12 {
        common::insert_attendee(
            &pool,
            &format!("att-{i}"),
            "Guest Attendee",
            &format!("guest{i}@example.com"),
            "evt-1",
        )
        .await;
    }

    let repo = PgAttendeeRepository::new(Arc::new(pool));

    assert_eq!(
        repo.list_by_event("evt-1", "", 0).await.unwrap().len() as i64,
        PAGE_SIZE
    );
    assert_eq!(repo.list_by_event("evt-1", "", 1).await.unwrap().len(), 2);
}
