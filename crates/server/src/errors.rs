use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::ModelError;
use serde::Serialize;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::debug;

const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// JSON body returned for every 4xx produced by the persons API.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: u16,
    pub timestamp: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub details: Option<Vec<String>>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>, details: Option<Vec<String>>) -> Self {
        Self { status, message: message.into(), details }
    }

    pub fn bad_request(message: impl Into<String>, details: Vec<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message, Some(details))
    }

    fn body(&self) -> ErrorBody {
        ErrorBody {
            status: self.status.as_u16(),
            timestamp: chrono::Local::now().format(TIMESTAMP_FORMAT).to_string(),
            message: self.message.clone(),
            details: self.details.clone(),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound { .. } => Self::new(StatusCode::NOT_FOUND, e.to_string(), None),
        }
    }
}

impl From<ModelError> for ApiError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(details) => Self::bad_request("validation failed", details),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match &rejection {
            // 类型不匹配、缺字段、JSON 语法错误统一按 400 返回
            JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                Self::bad_request("person properties with invalid type", vec![rejection.body_text()])
            }
            _ => Self::new(
                rejection.status(),
                "unreadable request body",
                Some(vec![rejection.body_text()]),
            ),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::bad_request("invalid path parameter", vec![rejection.body_text()])
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        debug!(status = %self.status, message = %self.message, "request rejected");
        (self.status, Json(self.body())).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("server failed: {0}")]
    Serve(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(err: ApiError) -> (StatusCode, Value) {
        let resp = err.into_response();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_names_the_id_and_omits_details() {
        let (status, body) = body_json(ServiceError::not_found(100).into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], 404);
        assert_eq!(body["message"], "person with id '100' cannot be found");
        assert!(body.get("details").is_none());
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn validation_lists_every_field_message() {
        let err = ModelError::Validation(vec!["name is mandatory".into(), "negative age is wrong".into()]);
        let (status, body) = body_json(err.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "validation failed");
        assert_eq!(
            body["details"],
            serde_json::json!(["name is mandatory", "negative age is wrong"])
        );
    }

    #[test]
    fn timestamp_uses_day_month_year() {
        let body = ApiError::bad_request("x", vec![]).body();
        let parsed = chrono::NaiveDateTime::parse_from_str(&body.timestamp, TIMESTAMP_FORMAT);
        assert!(parsed.is_ok(), "unexpected timestamp {}", body.timestamp);
    }
}
