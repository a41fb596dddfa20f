use axum::{Json, extract::State, response::IntoResponse};
use serde::Serialize;

use crate::{error::ApiError, services, state::AppState};

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
pub struct AssistantOutput {
    pub response: String,
}

#[cfg_attr(feature = "docs", utoipa::path(
    get,
    path = "/assistant",
    operation_id = "assistant/get",
    responses(
        (status = 200, body = AssistantOutput),
        (status = 503, description = "no chat completion provider configured"),
    )
))]
#[tracing::instrument(skip(state))]
pub async fn get(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let Some(llm) = state.assistant.as_ref() else {
        return Err(ApiError::Unavailable(
            "assistant is not configured".to_owned(),
        ));
    };

    let response = services::assistant::respond(state.bills.as_ref(), llm.as_ref()).await?;

    Ok(Json(AssistantOutput { response }))
}
