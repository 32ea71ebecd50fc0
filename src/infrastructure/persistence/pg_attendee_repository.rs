//! PostgreSQL implementation of the attendee repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::Attendee;
use crate::domain::repositories::{AttendeeRepository, PAGE_SIZE, page_to_offset};
use crate::error::AppError;
use crate::utils::db_error::{is_foreign_key_violation, is_unique_violation_on};
use crate::utils::search::like_pattern;

#[derive(Debug, FromRow)]
struct AttendeeRow {
    id: String,
    name: String,
    email: String,
    event_id: String,
    created_at: DateTime<Utc>,
    checked_in_at: Option<DateTime<Utc>>,
}

impl From<AttendeeRow> for Attendee {
    fn from(row: AttendeeRow) -> Self {
        Attendee::new(
            row.id,
            row.name,
            row.email,
            row.event_id,
            row.created_at,
            row.checked_in_at,
        )
    }
}

/// PostgreSQL repository for attendees.
///
/// `checked_in_at` is read from the attendee's check-in row.
pub struct PgAttendeeRepository {
    pool: Arc<PgPool>,
}

impl PgAttendeeRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AttendeeRepository for PgAttendeeRepository {
    async fn create(&self, attendee: Attendee) -> Result<Option<Attendee>, AppError> {
        let mut tx = self.pool.begin().await?;

        // Locks the event row so concurrent registrations count seats one at a time.
        let maximum_attendees = sqlx::query_scalar::<_, Option<i32>>(
            "SELECT maximum_attendees FROM events WHERE id = $1 FOR UPDATE",
        )
        .bind(&attendee.event_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::EventNotFound {
            event_id: attendee.event_id.clone(),
        })?;

        if let Some(max) = maximum_attendees {
            let registered = sqlx::query_scalar::<_, i64>(
                "SELECT COUNT(*) FROM attendees WHERE event_id = $1",
            )
            .bind(&attendee.event_id)
            .fetch_one(&mut *tx)
            .await?;

            if registered >= i64::from(max) {
                return Err(AppError::EventSoldOut {
                    event_id: attendee.event_id,
                });
            }
        }

        let row = sqlx::query_as::<_, AttendeeRow>(
            r#"
            INSERT INTO attendees (id, name, email, event_id, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, event_id, created_at, NULL::TIMESTAMPTZ AS checked_in_at
            "#,
        )
        .bind(&attendee.id)
        .bind(&attendee.name)
        .bind(&attendee.email)
        .bind(&attendee.event_id)
        .bind(attendee.created_at)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            if is_unique_violation_on(&e, "attendees_event_id_email_key") {
                AppError::AttendeeAlreadyExists {
                    email: attendee.email.clone(),
                    event_id: attendee.event_id.clone(),
                }
            } else if is_foreign_key_violation(&e) {
                AppError::EventNotFound {
                    event_id: attendee.event_id.clone(),
                }
            } else {
                e.into()
            }
        })?;

        tx.commit().await?;

        Ok(row.map(Attendee::from))
    }

    async fn get_by_id(&self, attendee_id: &str) -> Result<Option<Attendee>, AppError> {
        let row = sqlx::query_as::<_, AttendeeRow>(
            r#"
            SELECT a.id, a.name, a.email, a.event_id, a.created_at,
                   c.created_at AS checked_in_at
            FROM attendees a
            LEFT JOIN check_ins c ON c.attendee_id = a.id
            WHERE a.id = $1
            "#,
        )
        .bind(attendee_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Attendee::from))
    }

    async fn list_by_event(
        &self,
        event_id: &str,
        query: &str,
        page: u32,
    ) -> Result<Vec<Attendee>, AppError> {
        let rows = sqlx::query_as::<_, AttendeeRow>(
            r#"
            SELECT a.id, a.name, a.email, a.event_id, a.created_at,
                   c.created_at AS checked_in_at
            FROM attendees a
            LEFT JOIN check_ins c ON c.attendee_id = a.id
            WHERE a.event_id = $1 AND a.name ILIKE $2
            ORDER BY a.name DESC, a.id
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(event_id)
        .bind(like_pattern(query))
        .bind(PAGE_SIZE)
        .bind(page_to_offset(page))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Attendee::from).collect())
    }

    async fn count_by_event(&self, event_id: &str, query: &str) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM attendees WHERE event_id = $1 AND name ILIKE $2",
        )
        .bind(event_id)
        .bind(like_pattern(query))
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }
}
