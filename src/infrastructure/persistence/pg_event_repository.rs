//! PostgreSQL implementation of the event repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Event, EventWithAttendeeCount};
use crate::domain::repositories::{EventRepository, PAGE_SIZE, page_to_offset};
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on;
use crate::utils::search::like_pattern;

#[derive(Debug, FromRow)]
struct EventRow {
    id: String,
    title: String,
    slug: String,
    details: Option<String>,
    maximum_attendees: Option<i32>,
    created_at: DateTime<Utc>,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        Event::new(
            row.id,
            row.title,
            row.slug,
            row.details,
            row.maximum_attendees,
            row.created_at,
        )
    }
}

#[derive(Debug, FromRow)]
struct EventWithCountRow {
    #[sqlx(flatten)]
    event: EventRow,
    attendee_count: i64,
}

/// PostgreSQL repository for events.
pub struct PgEventRepository {
    pool: Arc<PgPool>,
}

impl PgEventRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    async fn create(&self, event: Event) -> Result<Option<Event>, AppError> {
        let row = sqlx::query_as::<_, EventRow>(
            r#"
            INSERT INTO events (id, title, slug, details, maximum_attendees, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, slug, details, maximum_attendees, created_at
            "#,
        )
        .bind(&event.id)
        .bind(&event.title)
        .bind(&event.slug)
        .bind(&event.details)
        .bind(event.maximum_attendees)
        .bind(event.created_at)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on(&e, "events_slug_key") {
                AppError::EventAlreadyExists {
                    field: "slug",
                    value: event.slug.clone(),
                }
            } else if is_unique_violation_on(&e, "events_pkey") {
                AppError::EventAlreadyExists {
                    field: "id",
                    value: event.id.clone(),
                }
            } else {
                e.into()
            }
        })?;

        Ok(row.map(Event::from))
    }

    async fn get_by_id(&self, event_id: &str) -> Result<Option<EventWithAttendeeCount>, AppError> {
        // Driven by events so an event without attendees still yields a row.
        let row = sqlx::query_as::<_, EventWithCountRow>(
            r#"
            SELECT e.id, e.title, e.slug, e.details, e.maximum_attendees, e.created_at,
                   COUNT(a.id) AS attendee_count
            FROM events e
            LEFT JOIN attendees a ON a.event_id = e.id
            WHERE e.id = $1
            GROUP BY e.id
            "#,
        )
        .bind(event_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|r| EventWithAttendeeCount {
            event: r.event.into(),
            attendee_count: r.attendee_count,
        }))
    }

    async fn exists(&self, event_id: &str) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM events WHERE id = $1)",
        )
        .bind(event_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn has_capacity(&self, event_id: &str) -> Result<bool, AppError> {
        let has_capacity = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT e.maximum_attendees IS NULL
                OR (SELECT COUNT(*) FROM attendees a WHERE a.event_id = e.id) < e.maximum_attendees
            FROM events e
            WHERE e.id = $1
            "#,
        )
        .bind(event_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(has_capacity.unwrap_or(false))
    }

    async fn attendee_exists(&self, email: &str, event_id: &str) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM attendees WHERE email = $1 AND event_id = $2)",
        )
        .bind(email)
        .bind(event_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn list(&self, page: u32, query: &str) -> Result<Vec<Event>, AppError> {
        let rows = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, title, slug, details, maximum_attendees, created_at
            FROM events
            WHERE title ILIKE $1
            ORDER BY created_at DESC, id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(like_pattern(query))
        .bind(PAGE_SIZE)
        .bind(page_to_offset(page))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Event::from).collect())
    }
}
