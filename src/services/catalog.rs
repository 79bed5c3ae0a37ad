// src/services/catalog.rs
use std::{fmt, path::Path};

use serde::Deserialize;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Route,
    Incident,
    General,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Route => "route",
            Category::Incident => "incident",
            Category::General => "general",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("category `{0}` has no templates")]
    EmptyCategory(Category),

    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid catalog file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Canned reply templates keyed by category. Every category holds at least
/// one template.
#[derive(Clone, Debug, Deserialize)]
#[serde(try_from = "RawCatalog")]
pub struct ResponseCatalog {
    route: Vec<String>,
    incident: Vec<String>,
    general: Vec<String>,
}

#[derive(Deserialize)]
struct RawCatalog {
    route: Vec<String>,
    incident: Vec<String>,
    general: Vec<String>,
}

impl TryFrom<RawCatalog> for ResponseCatalog {
    type Error = CatalogError;

    fn try_from(raw: RawCatalog) -> Result<Self, Self::Error> {
        ResponseCatalog::new(raw.route, raw.incident, raw.general)
    }
}

impl Default for ResponseCatalog {
    fn default() -> Self {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
        Self {
            route: owned(&[
                "I recommend taking the most efficient route based on current traffic conditions.",
                "The fastest route currently avoids major congestion points.",
                "Consider an alternate route to save time and avoid delays.",
            ]),
            incident: owned(&[
                "I've detected potential traffic incidents in your area.",
                "There are some reported traffic disruptions to be aware of.",
                "Current traffic conditions suggest being cautious on certain routes.",
            ]),
            general: owned(&[
                "I'm your AI traffic assistant. How can I help you today?",
                "Need traffic insights? I'm here to assist you.",
                "Ask me about routes, traffic conditions, or potential incidents.",
            ]),
        }
    }
}

impl ResponseCatalog {
    pub fn new(
        route: Vec<String>,
        incident: Vec<String>,
        general: Vec<String>,
    ) -> Result<Self, CatalogError> {
        for (category, templates) in [
            (Category::Route, &route),
            (Category::Incident, &incident),
            (Category::General, &general),
        ] {
            if templates.is_empty() {
                return Err(CatalogError::EmptyCategory(category));
            }
        }
        Ok(Self { route, incident, general })
    }

    /// Loads a catalog from a JSON file with `route`, `incident` and `general` lists.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn templates(&self, category: Category) -> &[String] {
        match category {
            Category::Route => &self.route,
            Category::Incident => &self.incident,
            Category::General => &self.general,
        }
    }
}
