use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::ApiErrorResponse;
use thiserror::Error;

/// Shown for failures the caller can do nothing about
pub const INTERNAL_ERROR_DETAIL: &str = "서버에서 오류가 발생했습니다. 나중에 다시 시도해주세요.";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("ID {0}에 해당하는 데이터를 찾을 수 없습니다.")]
    NotFound(u64),

    #[error("Malformed payload: {0}")]
    MalformedPayload(#[from] JsonRejection),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MalformedPayload(rejection) => rejection.status(),
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let (error, detail) = match &self {
            AppError::Internal(reason) => {
                tracing::error!("Internal error: {}", reason);
                ("Internal Server Error", INTERNAL_ERROR_DETAIL.to_string())
            }
            AppError::MalformedPayload(rejection) => ("HTTP Exception", rejection.body_text()),
            _ => ("HTTP Exception", self.to_string()),
        };

        let body = ApiErrorResponse {
            error: error.to_string(),
            status_code: status.as_u16(),
            detail,
        };

        (status, Json(body)).into_response()
    }
}
