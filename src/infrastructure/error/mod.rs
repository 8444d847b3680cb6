use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::datasource::{DirectoryError, TimestampError};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {message}")]
    Validation {
        /// Offending body field, `None` when the body as a whole is invalid
        field: Option<String>,
        /// Machine-readable error kind
        kind: &'static str,
        message: String,
    },

    #[error("{0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(field: Option<&str>, kind: &'static str, message: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.map(str::to_string),
            kind,
            message: message.into(),
        }
    }
}

/// Body of a 404 or 5xx response
#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

/// Body of a 422 response
#[derive(Serialize)]
struct ValidationErrorResponse {
    detail: Vec<ValidationErrorItem>,
}

#[derive(Serialize)]
struct ValidationErrorItem {
    loc: Vec<String>,
    msg: String,
    #[serde(rename = "type")]
    kind: String,
}

/// Check if running in production mode (based on RUN_MODE env var)
fn is_production() -> bool {
    std::env::var("RUN_MODE")
        .map(|m| m == "production" || m == "prod")
        .unwrap_or(false)
}

impl From<DirectoryError> for AppError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::NotFound(_) => AppError::NotFound(err.to_string()),
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl From<TimestampError> for AppError {
    fn from(err: TimestampError) -> Self {
        AppError::validation(Some("lastSyncAt"), "datetime_parsing", err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let kind = match &rejection {
            JsonRejection::JsonDataError(_) => "model_attributes_type",
            JsonRejection::JsonSyntaxError(_) => "json_invalid",
            JsonRejection::MissingJsonContentType(_) => "content_type",
            _ => "body_invalid",
        };
        AppError::validation(None, kind, rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation {
                field,
                kind,
                message,
            } => {
                tracing::warn!(
                    code = %kind,
                    status = %StatusCode::UNPROCESSABLE_ENTITY.as_u16(),
                    field = ?field,
                    message = %message,
                    "Request validation failed"
                );

                let mut loc = vec!["body".to_string()];
                loc.extend(field);

                let body = ValidationErrorResponse {
                    detail: vec![ValidationErrorItem {
                        loc,
                        msg: message,
                        kind: kind.to_string(),
                    }],
                };

                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
            AppError::NotFound(message) => {
                tracing::warn!(
                    code = "NOT_FOUND",
                    status = %StatusCode::NOT_FOUND.as_u16(),
                    message = %message,
                    "API error"
                );

                (StatusCode::NOT_FOUND, Json(ErrorResponse { detail: message })).into_response()
            }
            AppError::Internal(log_msg) => {
                let client_msg = if is_production() {
                    "Internal server error".to_string()
                } else {
                    log_msg.clone()
                };
                internal_error_response("INTERNAL_ERROR", client_msg, log_msg)
            }
        }
    }
}

fn internal_error_response(code: &str, client_message: String, log_message: String) -> Response {
    // Always log the detailed error server-side
    tracing::error!(
        code = %code,
        status = %StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
        message = %log_message,
        "API error"
    );

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            detail: client_message,
        }),
    )
        .into_response()
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_response() {
        let err: AppError = DirectoryError::NotFound("conn_999".to_string()).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"detail": "Connection 'conn_999' not found."})
        );
    }

    #[tokio::test]
    async fn test_timestamp_error_is_field_level() {
        let err: AppError = TimestampError::Unparseable("soon".to_string()).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        assert_eq!(body["detail"][0]["loc"], serde_json::json!(["body", "lastSyncAt"]));
        assert_eq!(body["detail"][0]["type"], "datetime_parsing");
    }

    #[tokio::test]
    async fn test_fixture_error_is_internal() {
        let err: AppError =
            DirectoryError::InvalidFixture("duplicate connection id 'x'".to_string()).into();
        assert!(matches!(err, AppError::Internal(_)));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
