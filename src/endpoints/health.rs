use crate::error::ApiError;

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound("no such route".to_owned())
}
