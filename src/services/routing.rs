// src/services/routing.rs
//! Distance and duration lookups against an external routing provider.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::message::Coordinate;

/// Profile used for every chat route lookup.
pub const DRIVING_PROFILE: &str = "driving-car";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RouteSummary {
    pub distance_meters: f64,
    pub duration_seconds: f64,
}

#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("routing provider is not configured")]
    NotConfigured,

    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP error (status {status}): {body}")]
    Http { status: u16, body: String },

    #[error("malformed routing response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for RoutingError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RoutingError::MalformedResponse(err.to_string())
        } else {
            RoutingError::Network(err.to_string())
        }
    }
}

/// Capability the responder uses to enrich route replies.
#[async_trait]
pub trait RouteProvider: Send + Sync {
    async fn compute_route(
        &self,
        coordinates: &[Coordinate],
        profile: &str,
    ) -> Result<RouteSummary, RoutingError>;
}

/// Stand-in used when no API key is configured. Every lookup fails, so
/// route replies degrade to plain templates.
#[derive(Debug, Default)]
pub struct DisabledRouting;

#[async_trait]
impl RouteProvider for DisabledRouting {
    async fn compute_route(
        &self,
        _coordinates: &[Coordinate],
        _profile: &str,
    ) -> Result<RouteSummary, RoutingError> {
        Err(RoutingError::NotConfigured)
    }
}

#[derive(Serialize)]
struct DirectionsRequest<'a> {
    coordinates: &'a [Coordinate],
}

#[derive(Deserialize)]
struct DirectionsResponse {
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    properties: FeatureProperties,
}

#[derive(Deserialize)]
struct FeatureProperties {
    summary: Summary,
}

#[derive(Deserialize)]
struct Summary {
    distance: f64,
    duration: f64,
}

/// Pulls the first route summary out of an openrouteservice GeoJSON body.
fn parse_summary(body: &[u8]) -> Result<RouteSummary, RoutingError> {
    let response: DirectionsResponse = serde_json::from_slice(body)
        .map_err(|e| RoutingError::MalformedResponse(e.to_string()))?;
    let feature = response
        .features
        .into_iter()
        .next()
        .ok_or_else(|| RoutingError::MalformedResponse("no route features".to_string()))?;
    let summary = feature.properties.summary;
    Ok(RouteSummary {
        distance_meters: summary.distance,
        duration_seconds: summary.duration,
    })
}

/// Client for the openrouteservice directions API.
pub struct OrsClient {
    http_client: Client,
    base_url: String,
    api_key: String,
}

impl OrsClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, RoutingError> {
        let http_client = Client::builder()
            .connect_timeout(Duration::from_secs(5).min(timeout))
            .timeout(timeout)
            .build()
            .map_err(|e| RoutingError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    fn directions_url(&self, profile: &str) -> String {
        format!("{}/v2/directions/{}/geojson", self.base_url, profile)
    }
}

#[async_trait]
impl RouteProvider for OrsClient {
    async fn compute_route(
        &self,
        coordinates: &[Coordinate],
        profile: &str,
    ) -> Result<RouteSummary, RoutingError> {
        if let (Some(from), Some(to)) = (coordinates.first(), coordinates.last()) {
            tracing::debug!(
                profile,
                points = coordinates.len(),
                from_lon = from.lon(),
                from_lat = from.lat(),
                to_lon = to.lon(),
                to_lat = to.lat(),
                "requesting route"
            );
        }

        let response = self
            .http_client
            .post(self.directions_url(profile))
            .header("Authorization", &self.api_key)
            .json(&DirectionsRequest { coordinates })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RoutingError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await?;
        parse_summary(&body)
    }
}
