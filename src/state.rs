use std::sync::Arc;

use axum::extract::FromRef;

use crate::{config::Config, data::BillStore, llm::ChatCompletion};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub config: Arc<Config>,
    pub bills: Arc<dyn BillStore>,
    pub assistant: Option<Arc<dyn ChatCompletion>>,
}
