use std::time::Duration;

use anyhow::{Context, Result};
use opentelemetry::{global, trace::TracerProvider as _};
use opentelemetry_otlp::{SpanExporter, WithExportConfig};
use opentelemetry_sdk::{
    Resource,
    propagation::TraceContextPropagator,
    trace::{Sampler, SdkTracerProvider},
};
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Installs the global tracing subscriber. When OTLP export is enabled the
/// returned provider must be shut down before exit to flush pending spans.
pub fn init(config: &Config) -> Result<Option<SdkTracerProvider>> {
    let service_name = env!("CARGO_CRATE_NAME");

    let tracer_provider = if config.otel_enabled {
        global::set_text_map_propagator(TraceContextPropagator::new());
        let exporter = SpanExporter::builder()
            .with_tonic()
            .with_timeout(Duration::from_secs(3))
            .build()
            .context("error creating trace exporter")?;

        let provider = SdkTracerProvider::builder()
            .with_resource(Resource::builder().with_service_name(service_name).build())
            .with_batch_exporter(exporter)
            .with_sampler(Sampler::TraceIdRatioBased(0.5))
            .build();

        global::set_tracer_provider(provider.clone());
        Some(provider)
    } else {
        None
    };

    let otel_layer = tracer_provider.as_ref().map(|provider| {
        OpenTelemetryLayer::new(provider.tracer(service_name)).with_location(false)
    });

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{service_name}=debug,tower_http=info,sqlx=info,axum::rejection=trace",)
                    .into()
            }),
        )
        .with(otel_layer)
        .with(
            tracing_subscriber::fmt::layer()
                .with_line_number(false)
                .with_file(false),
        )
        .try_init()
        .context("error installing tracing subscriber")?;

    Ok(tracer_provider)
}
