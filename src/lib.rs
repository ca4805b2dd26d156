pub mod client;
pub mod config;
pub mod constants;
pub mod credential;
pub mod debounce;
pub mod error;
pub mod models;
pub mod normalize;
pub mod remote;
pub mod utils;
pub mod viewer;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tera::Tera;

// Re-export types at crate root for convenient importing
pub use crate::client::{CatalogClient, ClientConfig};
pub use crate::credential::{CredentialSource, derive_credential};
pub use crate::debounce::{FilterDebouncer, RequestSequence, RequestTicket};
pub use crate::error::{CatalogError, Result};
pub use crate::models::{CatalogPage, FilterCriteria, PageRequest, ProductRecord};

/// Application state shared across all viewer handlers
#[derive(Clone)]
pub struct AppState {
    pub client: CatalogClient,
    pub templates: Arc<Tera>,
}

impl AppState {
    pub fn new(client: CatalogClient) -> tera::Result<Self> {
        Ok(Self {
            client,
            templates: Arc::new(viewer::catalog_templates()?),
        })
    }
}

/// Viewer routes without CORS or other deployment layers.
pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(viewer::show_catalog))
        .route("/api/products", get(viewer::get_page))
        .route("/api/filter", post(viewer::filter))
        .with_state(app_state)
}
