// Route exports
pub mod health;
pub mod search;

use actix_web::web;
use std::sync::Arc;

use crate::services::DocumentStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub origin_city: String,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>, origin_city: impl Into<String>) -> Self {
        Self {
            store,
            origin_city: origin_city.into(),
        }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        .configure(search::configure)
        .configure(health::configure);
}
