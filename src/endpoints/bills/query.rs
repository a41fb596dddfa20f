use axum::{Json, extract::State, response::IntoResponse};
use serde::Serialize;

use crate::{data::Bill, error::ApiError, services, state::AppState};

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
pub struct QueryBillsOutput {
    pub bills: Vec<Bill>,
}

#[cfg_attr(feature = "docs", utoipa::path(
    get,
    path = "/bills",
    operation_id = "bills/query",
    tag = "bills",
    responses(
        (status = 200, body = QueryBillsOutput),
    )
))]
#[tracing::instrument(skip(state))]
pub async fn query(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let bills = services::bills::list(state.bills.as_ref()).await?;

    Ok(Json(QueryBillsOutput { bills }))
}
