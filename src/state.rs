// src/state.rs
use std::sync::Arc;

use anyhow::Context;

use crate::config::Config;
use crate::services::catalog::ResponseCatalog;
use crate::services::responder::{RandomPicker, Responder};
use crate::services::routing::{DisabledRouting, OrsClient, RouteProvider};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub responder: Responder,
}

impl AppState {
    pub fn new(responder: Responder) -> Self {
        Self { responder }
    }

    /// Wires the production responder: catalog from disk or built-in,
    /// openrouteservice when a key is configured, random template choice.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => ResponseCatalog::from_file(path)
                .with_context(|| format!("loading catalog from {}", path.display()))?,
            None => ResponseCatalog::default(),
        };

        let routing: Arc<dyn RouteProvider> = match &config.ors_api_key {
            Some(key) => Arc::new(
                OrsClient::new(&config.ors_base_url, key, config.routing_timeout)
                    .context("building routing client")?,
            ),
            None => {
                tracing::warn!("ORS_API_KEY not set, route estimates are disabled");
                Arc::new(DisabledRouting)
            }
        };

        Ok(Self::new(Responder::new(catalog, routing, Arc::new(RandomPicker))))
    }
}
