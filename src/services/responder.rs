// src/services/responder.rs
use std::sync::Arc;

use rand::seq::IndexedRandom;

use crate::message::Coordinate;
use crate::services::catalog::{Category, ResponseCatalog};
use crate::services::routing::{DRIVING_PROFILE, RouteProvider, RouteSummary, RoutingError};

const ROUTE_KEYWORDS: [&str; 4] = ["route", "direction", "way", "navigate"];
const INCIDENT_KEYWORDS: [&str; 4] = ["accident", "incident", "traffic", "congestion"];

/// Picks the category for a message.
///
/// Case-insensitive substring match, route keywords checked first. This is
/// deliberately loose: "navigated" hits "navigate" and "always" hits "way".
pub fn classify(msg: &str) -> Category {
    let msg_lower = msg.to_lowercase();

    if ROUTE_KEYWORDS.iter().any(|k| msg_lower.contains(k)) {
        Category::Route
    } else if INCIDENT_KEYWORDS.iter().any(|k| msg_lower.contains(k)) {
        Category::Incident
    } else {
        Category::General
    }
}

/// Source of template choices. Swap in a fixed picker to get exact replies in tests.
pub trait TemplatePicker: Send + Sync {
    fn pick<'a>(&self, templates: &'a [String]) -> Option<&'a String>;
}

/// Uniform random choice from the thread-local generator.
#[derive(Debug, Default)]
pub struct RandomPicker;

impl TemplatePicker for RandomPicker {
    fn pick<'a>(&self, templates: &'a [String]) -> Option<&'a String> {
        templates.choose(&mut rand::rng())
    }
}

pub fn format_route_analysis(summary: &RouteSummary, template: &str) -> String {
    format!(
        "Route analysis: Estimated distance is {:.2} km. Estimated travel time is {:.2} minutes. {}",
        summary.distance_meters / 1000.0,
        summary.duration_seconds / 60.0,
        template
    )
}

#[derive(Clone)]
pub struct Responder {
    catalog: Arc<ResponseCatalog>,
    routing: Arc<dyn RouteProvider>,
    picker: Arc<dyn TemplatePicker>,
}

impl Responder {
    pub fn new(
        catalog: ResponseCatalog,
        routing: Arc<dyn RouteProvider>,
        picker: Arc<dyn TemplatePicker>,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            routing,
            picker,
        }
    }

    fn template(&self, category: Category) -> String {
        let templates = self.catalog.templates(category);
        // Catalog categories are never empty, so the fallback is unreachable
        // unless a picker misbehaves.
        self.picker
            .pick(templates)
            .or_else(|| templates.first())
            .cloned()
            .unwrap_or_default()
    }

    /// Builds the reply for one chat message. Never fails: a routing error
    /// is logged and the reply falls back to a plain route template.
    pub async fn respond(&self, msg: &str, coordinates: Option<&[Coordinate]>) -> String {
        let category = classify(msg);
        tracing::debug!(%category, "classified chat message");

        if category == Category::Route {
            if let Some(coords) = coordinates.filter(|c| c.len() >= 2) {
                match self.routing.compute_route(coords, DRIVING_PROFILE).await {
                    Ok(summary) => {
                        return format_route_analysis(&summary, &self.template(Category::Route));
                    }
                    Err(RoutingError::NotConfigured) => {
                        tracing::debug!("routing disabled, replying without estimate");
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "route lookup failed, replying without estimate");
                    }
                }
            }
        }

        self.template(category)
    }
}
