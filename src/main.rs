use std::sync::Arc;

use bills_backend::{
    config::Config,
    data,
    llm::{ChatCompletion, GroqClient},
    router,
    state::AppState,
    telemetry,
};
use tokio::{net::TcpListener, signal};

#[tokio::main]
async fn main() {
    let config = Arc::new(Config::new().expect("config"));
    let tracer_provider = telemetry::init(&config).expect("telemetry");

    let bills = data::connect(&config).await.expect("data");
    let assistant = match config.assistant {
        Some(ref assistant_config) => {
            let client = GroqClient::new(reqwest::Client::new(), assistant_config.clone());
            Some(Arc::new(client) as Arc<dyn ChatCompletion>)
        }
        None => {
            tracing::warn!("GROQ_API_KEY not set, assistant endpoint is disabled");
            None
        }
    };

    let state = AppState {
        config: config.clone(),
        bills: bills.clone(),
        assistant,
    };

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await.unwrap();
    tracing::debug!("listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    bills.close().await;
    if let Some(provider) = tracer_provider {
        if let Err(err) = provider.shutdown() {
            tracing::error!("error shutting down tracer provider: {}", err);
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("error installing ctrl+c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("error installing signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
