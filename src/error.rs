//! Domain error taxonomy and its HTTP representation.
//!
//! Every failure a service can report is a distinct [`AppError`] variant, so
//! callers can match on the precise reason. Variants are grouped into families
//! ([`ErrorKind`]) which drive the HTTP status code.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serializable error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub kind: ErrorKind,
    pub message: String,
    pub details: Value,
}

/// Error family used for status-code mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
    Capacity,
    CreationFailed,
    Internal,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("The given event was not found.")]
    EventNotFound { event_id: String },

    #[error("Attendee not found.")]
    AttendeeNotFound { attendee_id: String },

    #[error("This attendee is already registered in the event.")]
    AttendeeAlreadyExists { email: String, event_id: String },

    #[error("An event with this {field} already exists.")]
    EventAlreadyExists { field: &'static str, value: String },

    #[error("Attendee has already made a check-in.")]
    AlreadyCheckedIn { attendee_id: String },

    #[error("This registration failed because the event has sold out.")]
    EventSoldOut { event_id: String },

    #[error("An error occurred while creating the event.")]
    EventNotCreated { slug: String },

    #[error("An error occurred while registering the attendee.")]
    AttendeeNotCreated { email: String, event_id: String },

    #[error("An error occurred while registering the check-in.")]
    CheckInNotRegistered { attendee_id: String },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Family of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Validation { .. } => ErrorKind::Validation,
            AppError::EventNotFound { .. } | AppError::AttendeeNotFound { .. } => {
                ErrorKind::NotFound
            }
            AppError::AttendeeAlreadyExists { .. }
            | AppError::EventAlreadyExists { .. }
            | AppError::AlreadyCheckedIn { .. } => ErrorKind::Conflict,
            AppError::EventSoldOut { .. } => ErrorKind::Capacity,
            AppError::EventNotCreated { .. }
            | AppError::AttendeeNotCreated { .. }
            | AppError::CheckInNotRegistered { .. } => ErrorKind::CreationFailed,
            AppError::Internal { .. } => ErrorKind::Internal,
        }
    }

    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::EventNotFound { .. } => "event_not_found",
            AppError::AttendeeNotFound { .. } => "attendee_not_found",
            AppError::AttendeeAlreadyExists { .. } => "attendee_already_exists",
            AppError::EventAlreadyExists { .. } => "event_already_exists",
            AppError::AlreadyCheckedIn { .. } => "already_checked_in",
            AppError::EventSoldOut { .. } => "event_sold_out",
            AppError::EventNotCreated { .. } => "event_not_created",
            AppError::AttendeeNotCreated { .. } => "attendee_not_created",
            AppError::CheckInNotRegistered { .. } => "check_in_not_registered",
            AppError::Internal { .. } => "internal_error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::Validation => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict | ErrorKind::Capacity => StatusCode::CONFLICT,
            ErrorKind::CreationFailed => StatusCode::SERVICE_UNAVAILABLE,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn details(&self) -> Value {
        match self {
            AppError::Validation { details, .. } | AppError::Internal { details, .. } => {
                details.clone()
            }
            AppError::EventNotFound { event_id } | AppError::EventSoldOut { event_id } => {
                json!({ "event_id": event_id })
            }
            AppError::AttendeeNotFound { attendee_id }
            | AppError::AlreadyCheckedIn { attendee_id }
            | AppError::CheckInNotRegistered { attendee_id } => {
                json!({ "attendee_id": attendee_id })
            }
            AppError::AttendeeAlreadyExists { email, event_id }
            | AppError::AttendeeNotCreated { email, event_id } => {
                json!({ "email": email, "event_id": event_id })
            }
            AppError::EventAlreadyExists { field, value } => {
                let mut details = serde_json::Map::new();
                details.insert((*field).to_string(), Value::String(value.clone()));
                Value::Object(details)
            }
            AppError::EventNotCreated { slug } => json!({ "slug": slug }),
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        ErrorInfo {
            code: self.code(),
            kind: self.kind(),
            message: self.to_string(),
            details: self.details(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(code = self.code(), error = %self, "Request failed");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("The field '{}' is invalid.", field),
                })
            })
            .collect();
        messages.sort();

        let message = if messages.is_empty() {
            "Validation failed".to_string()
        } else {
            messages.join(" ")
        };

        let details = serde_json::to_value(&errors).unwrap_or_default();

        AppError::Validation { message, details }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "Database error");
        AppError::internal("Database error", json!({}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_families() {
        let not_found = AppError::EventNotFound {
            event_id: "evt".to_string(),
        };
        assert_eq!(not_found.kind(), ErrorKind::NotFound);
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let sold_out = AppError::EventSoldOut {
            event_id: "evt".to_string(),
        };
        assert_eq!(sold_out.kind(), ErrorKind::Capacity);
        assert_eq!(sold_out.status(), StatusCode::CONFLICT);

        let checked_in = AppError::AlreadyCheckedIn {
            attendee_id: "att".to_string(),
        };
        assert_eq!(checked_in.kind(), ErrorKind::Conflict);

        let not_created = AppError::CheckInNotRegistered {
            attendee_id: "att".to_string(),
        };
        assert_eq!(not_created.kind(), ErrorKind::CreationFailed);
        assert_eq!(not_created.status(), StatusCode::SERVICE_UNAVAILABLE);

        let invalid = AppError::bad_request("bad", json!({}));
        assert_eq!(invalid.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_error_info_details() {
        let err = AppError::AttendeeAlreadyExists {
            email: "ana@example.com".to_string(),
            event_id: "evt-1".to_string(),
        };
        let info = err.to_error_info();

        assert_eq!(info.code, "attendee_already_exists");
        assert_eq!(info.kind, ErrorKind::Conflict);
        assert_eq!(info.details["email"], "ana@example.com");
        assert_eq!(info.details["event_id"], "evt-1");
    }

    #[test]
    fn test_event_already_exists_message_names_field() {
        let err = AppError::EventAlreadyExists {
            field: "slug",
            value: "tech-summit".to_string(),
        };
        assert_eq!(err.to_string(), "An event with this slug already exists.");
        assert_eq!(err.to_error_info().details["slug"], "tech-summit");
    }
}
