use std::time::Duration;

use axum::{
    Router,
    extract::MatchedPath,
    response::Response,
    routing::get,
};
use config::Config;
use endpoints::*;
use http::{HeaderValue, Method, header, header::USER_AGENT};
use opentelemetry_semantic_conventions::{
    attribute::OTEL_STATUS_CODE,
    trace::{
        HTTP_REQUEST_METHOD, HTTP_RESPONSE_STATUS_CODE, HTTP_ROUTE, NETWORK_PROTOCOL_VERSION,
        URL_FULL, USER_AGENT_ORIGINAL,
    },
};
use state::AppState;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::field::Empty;

pub mod config;
pub mod data;
pub mod date;
pub mod endpoints;
pub mod error;
pub mod llm;
pub mod services;
pub mod state;
pub mod telemetry;

pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/bills", get(bills::query).post(bills::create))
        .route("/assistant", get(assistant::get))
        .route("/health", get(health::health_check));

    #[cfg(feature = "docs")]
    let routes = routes.route("/openapi.json", get(openapi::openapi));

    routes
        .fallback(health::not_found)
        .layer(cors(&state.config))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &http::Request<axum::body::Body>| {
                    let matched_path = request
                        .extensions()
                        .get::<MatchedPath>()
                        .map(MatchedPath::as_str)
                        .unwrap_or("{unknown}");

                    tracing::info_span!(
                        "request",
                        otel.name = format!("{} {}", request.method(), matched_path),
                        { OTEL_STATUS_CODE } = Empty,
                        { HTTP_REQUEST_METHOD } = ?request.method(),
                        { HTTP_ROUTE } = %matched_path,
                        { URL_FULL } = %request.uri().path(),
                        { NETWORK_PROTOCOL_VERSION } = ?request.version(),
                        { HTTP_RESPONSE_STATUS_CODE } = Empty,
                        { USER_AGENT_ORIGINAL } = %request.headers().get(USER_AGENT).and_then(|h| h.to_str().ok()).unwrap_or_default()
                    )
                })
                .on_response(|response: &Response, _latency: Duration, span: &tracing::Span| {
                    let status_code = response.status().as_u16();
                    let is_failure = if status_code < 300 { "ok" } else { "error" };
                    span.record(OTEL_STATUS_CODE, is_failure);
                    span.record(HTTP_RESPONSE_STATUS_CODE, status_code);
                })
                .on_failure(|_, _, span: &tracing::Span| {
                    span.record(OTEL_STATUS_CODE, "error");
                }),
        )
}

#[tracing::instrument(skip(config))]
fn cors(config: &Config) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::OPTIONS, Method::HEAD, Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::ACCEPT_ENCODING,
            header::ACCEPT_LANGUAGE,
        ]);

    match config.front_base_url.parse::<HeaderValue>() {
        Ok(origin) => cors.allow_origin(origin),
        Err(err) => {
            tracing::warn!(
                "invalid FRONT_BASE_URL {:?}, cross-origin requests are refused: {}",
                config.front_base_url,
                err
            );
            cors
        }
    }
}
