use std::fmt;

use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse
};
use derive_more::Display;
use serde::Serialize;
use validator::ValidationErrors;

#[derive(Debug)]
pub enum AppError {
    ValidationError(Vec<FieldError>),
    InvalidRequest(String),
    ConfigurationMissing(String),
    QueryFailed(String),
    DeliveryFailed(String),
    NotFound(String),
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ValidationError(errors) => {
                let messages = errors.iter()
                    .map(|e| format!("{}:{}", e.field, e.message))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "validation error: {}", messages)
            }
            AppError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            AppError::ConfigurationMissing(msg) => write!(f, "Configuration missing: {}", msg),
            AppError::QueryFailed(msg) => write!(f, "Data source query failed: {}", msg),
            AppError::DeliveryFailed(msg) => write!(f, "Email delivery failed: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::InternalError(msg) => write!(f, "Internal server error: {}", msg)
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::ValidationError(errors) => {
                serde_json::json!({
                    "statusCode": self.status_code().as_u16(),
                    "error": "Validation failed",
                    "details": errors
                })
            }
            _ => {
                serde_json::json!({
                    "statusCode": self.status_code().as_u16(),
                    "message": self.to_string()
                })
            }
        };
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::ConfigurationMissing(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::QueryFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::DeliveryFailed(_) => StatusCode::BAD_GATEWAY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let field_errors = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(|e| FieldError {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "Invalid value".to_string()),
                })
            })
            .collect();

        AppError::ValidationError(field_errors)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::QueryFailed(err.to_string())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalError(err.to_string())
    }
}

/// Errors raised by the email provider client before they are folded
/// into the request-level taxonomy.
#[derive(Debug, Display)]
pub enum EmailError {
    #[display("Email provider rejected the message: {_0}")]
    ProviderRejected(String),

    #[display("Email provider unreachable: {_0}")]
    Unreachable(String),

    #[display("Email provider returned an unreadable response: {_0}")]
    MalformedResponse(String),
}

impl From<EmailError> for AppError {
    fn from(err: EmailError) -> Self {
        AppError::DeliveryFailed(err.to_string())
    }
}

#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}
