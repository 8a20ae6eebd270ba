//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// 核心错误类型
///
/// 业务相关的变体携带一个短标识（如 `ad-not-found`），直接写入响应体的 `title` 字段。
#[derive(Debug)]
pub enum CoreError {
    BadRequest(String),
    NotFound { title: &'static str, message: String },
    Conflict { title: &'static str, message: String },
    UnprocessableEntity { title: &'static str, message: String },
}

/// 错误响应结构
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub title: String,
    pub error: String,
}

impl CoreError {
    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::BadRequest(_) => StatusCode::BAD_REQUEST,
            CoreError::NotFound { .. } => StatusCode::NOT_FOUND,
            CoreError::Conflict { .. } => StatusCode::CONFLICT,
            CoreError::UnprocessableEntity { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (title, message) = match self {
            CoreError::BadRequest(msg) => ("bad-request", msg),
            CoreError::NotFound { title, message }
            | CoreError::Conflict { title, message }
            | CoreError::UnprocessableEntity { title, message } => (title, message),
        };

        let error_response = ErrorResponse {
            code: status.as_u16(),
            title: title.to_string(),
            error: message,
        };

        (status, Json(error_response)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn test_status_codes() {
        let cases = [
            (CoreError::BadRequest("bad".into()), StatusCode::BAD_REQUEST),
            (
                CoreError::NotFound {
                    title: "ad-not-found",
                    message: "missing".into(),
                },
                StatusCode::NOT_FOUND,
            ),
            (
                CoreError::Conflict {
                    title: "ad-already-exists",
                    message: "dup".into(),
                },
                StatusCode::CONFLICT,
            ),
            (
                CoreError::UnprocessableEntity {
                    title: "ad-data-is-invalid",
                    message: "invalid".into(),
                },
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.status(), status);
        }
    }

    #[tokio::test]
    async fn test_response_body_shape() {
        let response = CoreError::Conflict {
            title: "ad-already-exists",
            message: "an ad with title T already exists".into(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "code": 409,
                "title": "ad-already-exists",
                "error": "an ad with title T already exists",
            })
        );
    }
}
