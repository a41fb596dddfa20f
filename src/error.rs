use std::collections::HashMap;

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use http::StatusCode;
use serde::Serialize;
use serde_json::json;

use crate::services::bills::BillError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("bad request (details): {0}")]
    BadRequestDetails(String, ErrorDetails),

    #[error("unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorDetails(pub HashMap<String, String>);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("{:#?}", self);

        let (status_code, error_message, details) = match self {
            ApiError::UnexpectedError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Some("unexpected error".to_string()),
                None,
            ),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, None, None),
            ApiError::BadRequest(err) => (StatusCode::BAD_REQUEST, Some(err), None),
            ApiError::BadRequestDetails(err, details) => {
                (StatusCode::BAD_REQUEST, Some(err), Some(details))
            }
            ApiError::Unavailable(err) => (StatusCode::SERVICE_UNAVAILABLE, Some(err), None),
        };

        return (
            status_code,
            Json(json!({ "error": error_message, "details": details })),
        )
            .into_response();
    }
}

impl From<BillError> for ApiError {
    fn from(err: BillError) -> Self {
        return match err {
            BillError::InvalidInput(details) => {
                ApiError::BadRequestDetails("invalid request".to_owned(), ErrorDetails(details))
            }
            BillError::Date(err) => ApiError::BadRequestDetails(
                "invalid request".to_owned(),
                ErrorDetails(HashMap::from([("Date".to_owned(), err.to_string())])),
            ),
            BillError::Storage(err) => ApiError::UnexpectedError(anyhow::anyhow!(err)),
        };
    }
}
