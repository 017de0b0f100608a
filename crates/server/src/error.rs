//! Unified error handling for the service.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use stockroom_core::LedgerError;

use crate::db::RepositoryError;
use crate::models::{ApiResponse, ValidationErrors};

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Referenced item, movement or order does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Stock computation rejected the operation.
    #[error("{0}")]
    Ledger(#[from] LedgerError),

    /// Supplied order price does not match the server-computed total.
    #[error("supplied price does not match computed price")]
    InvalidPrice,

    /// A concurrent request claimed the same resource; safe to retry.
    #[error("{0}")]
    Conflict(String),

    /// Request fields failed validation.
    #[error("validation failed")]
    Validation(ValidationErrors),

    /// Database operation failed.
    #[error("database error: {0}")]
    Database(RepositoryError),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => Self::NotFound("resource not found".to_string()),
            other => Self::Database(other),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(RepositoryError::Database(err))
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Ledger(_) | Self::InvalidPrice | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Server errors carry internal detail; log and capture them, then
        // hand the client a generic body.
        if matches!(self, Self::Database(_) | Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(error = %self, sentry_event_id = %event_id, "request error");
        }

        // A negative reconciled stock means something edited stock outside
        // the locking discipline; worth a trace even though the client only
        // sees a 400.
        if matches!(self, Self::Ledger(LedgerError::InvalidStock)) {
            tracing::warn!(error = %self, "stock reconciliation produced a negative value");
        }

        let status = self.status();
        let body = match self {
            Self::Database(_) | Self::Internal(_) => {
                ApiResponse::error("Internal server error", status.as_u16())
            }
            Self::Validation(errors) => {
                ApiResponse::validation("Validation failed", status.as_u16(), errors.into_map())
            }
            other => ApiResponse::error(&other.to_string(), status.as_u16()),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            get_status(AppError::NotFound("item 1 not found".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Ledger(LedgerError::NotEnoughStock)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Ledger(LedgerError::InvalidStock)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(get_status(AppError::InvalidPrice), StatusCode::BAD_REQUEST);
        assert_eq!(
            get_status(AppError::Conflict("order number already taken".to_string())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            get_status(AppError::Internal("boom".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn repository_not_found_maps_to_not_found() {
        let err = AppError::from(RepositoryError::NotFound);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn internal_detail_is_not_leaked() {
        let err = AppError::Database(RepositoryError::DataCorruption(
            "movement 3 has unknown kind \"Z\"".to_string(),
        ));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn ledger_errors_keep_their_message() {
        let err = AppError::Ledger(LedgerError::NotEnoughStock);
        assert_eq!(err.to_string(), "insufficient stock for withdrawal");
    }
}
