use crate::endpoints;
use axum::Json;
use utoipa::OpenApi;

#[derive(utoipa::OpenApi)]
#[openapi(paths(
    endpoints::bills::query::query,
    endpoints::bills::create::create,
    endpoints::assistant::get
))]
struct ApiDoc;

pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
