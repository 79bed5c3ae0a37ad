#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use traffic_chat::message::Coordinate;
use traffic_chat::services::catalog::ResponseCatalog;
use traffic_chat::services::responder::{Responder, TemplatePicker};
use traffic_chat::services::routing::{RouteProvider, RouteSummary, RoutingError};

/// Always picks the template at `index`.
pub struct FixedPicker(pub usize);

impl TemplatePicker for FixedPicker {
    fn pick<'a>(&self, templates: &'a [String]) -> Option<&'a String> {
        templates.get(self.0)
    }
}

/// Returns the same summary for every lookup and records what it was asked.
#[derive(Default)]
pub struct StubRouting {
    pub summary: Option<RouteSummary>,
    pub calls: Mutex<Vec<(Vec<Coordinate>, String)>>,
}

impl StubRouting {
    pub fn ok(distance_meters: f64, duration_seconds: f64) -> Self {
        Self {
            summary: Some(RouteSummary {
                distance_meters,
                duration_seconds,
            }),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A provider whose every lookup fails with a network error.
    pub fn failing() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl RouteProvider for StubRouting {
    async fn compute_route(
        &self,
        coordinates: &[Coordinate],
        profile: &str,
    ) -> Result<RouteSummary, RoutingError> {
        self.calls
            .lock()
            .unwrap()
            .push((coordinates.to_vec(), profile.to_string()));
        self.summary
            .ok_or_else(|| RoutingError::Network("connection refused".to_string()))
    }
}

pub fn responder_with(routing: Arc<StubRouting>, pick: usize) -> Responder {
    Responder::new(ResponseCatalog::default(), routing, Arc::new(FixedPicker(pick)))
}

pub fn two_points() -> Vec<Coordinate> {
    vec![Coordinate(8.681495, 49.41461), Coordinate(8.687872, 49.420318)]
}
