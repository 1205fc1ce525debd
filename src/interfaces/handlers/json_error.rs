use actix_web::{http::StatusCode, HttpResponse};

/// Error envelope shared by every non-2xx answer the API gives.
pub fn json_error(status: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(status).json(serde_json::json!({
        "statusCode": status.as_u16(),
        "message": message
    }))
}
