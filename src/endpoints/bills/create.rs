use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::{data::Bill, error::ApiError, services, state::AppState};

#[derive(Debug, Deserialize)]
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[serde(rename_all = "PascalCase")]
pub struct CreateBillInput {
    pub price: f64,
    /// e.g. `5 March 2024`
    pub date: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
pub struct CreateBillOutput {
    pub msg: Bill,
}

#[cfg_attr(feature = "docs", utoipa::path(
    post,
    path = "/bills",
    operation_id = "bills/create",
    tag = "bills",
    request_body(
        content = CreateBillInput,
        content_type = "application/json",
    ),
    responses(
        (status = 201, body = CreateBillOutput),
        (status = 400, description = "invalid description, price or date"),
    )
))]
#[tracing::instrument(skip(state))]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateBillInput>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload.map_err(|err| ApiError::BadRequest(err.body_text()))?;

    let bill = services::bills::create(
        state.bills.as_ref(),
        &payload.description,
        payload.price,
        &payload.date,
    )
    .await?;

    return Ok((StatusCode::CREATED, Json(CreateBillOutput { msg: bill })));
}
