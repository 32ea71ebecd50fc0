//! PostgreSQL implementation of the check-in repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::CheckIn;
use crate::domain::repositories::CheckInRepository;
use crate::error::AppError;
use crate::utils::db_error::{is_foreign_key_violation, is_unique_violation_on};

#[derive(Debug, FromRow)]
struct CheckInRow {
    id: i64,
    attendee_id: String,
    created_at: DateTime<Utc>,
}

/// PostgreSQL repository for check-ins.
pub struct PgCheckInRepository {
    pool: Arc<PgPool>,
}

impl PgCheckInRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CheckInRepository for PgCheckInRepository {
    async fn create(&self, attendee_id: &str) -> Result<Option<CheckIn>, AppError> {
        let row = sqlx::query_as::<_, CheckInRow>(
            r#"
            INSERT INTO check_ins (attendee_id)
            VALUES ($1)
            RETURNING id, attendee_id, created_at
            "#,
        )
        .bind(attendee_id)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on(&e, "check_ins_attendee_id_key") {
                AppError::AlreadyCheckedIn {
                    attendee_id: attendee_id.to_string(),
                }
            } else if is_foreign_key_violation(&e) {
                AppError::AttendeeNotFound {
                    attendee_id: attendee_id.to_string(),
                }
            } else {
                e.into()
            }
        })?;

        Ok(row.map(|r| CheckIn::new(r.id, r.attendee_id, r.created_at)))
    }
}
