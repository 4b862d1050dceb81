//! Data Transfer Objects for the HTTP API.
//!
//! Eclipse records are serialized directly; these types cover the
//! informational endpoints.

use serde::{Deserialize, Serialize};

pub use crate::models::EclipseRecord;

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
    pub docs: String,
}

impl Default for WelcomeResponse {
    fn default() -> Self {
        Self {
            message: "Welcome to the Lunar and Solar Eclipses API".to_string(),
            docs: "/docs".to_string(),
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Number of records currently served
    pub records: usize,
    /// Rows excluded by the last load
    pub dropped_rows: usize,
    pub load_strategy: String,
}

/// One entry in the `GET /docs` listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointDoc {
    pub method: String,
    pub path: String,
    pub description: String,
}

impl EndpointDoc {
    fn get(path: &str, description: &str) -> Self {
        Self {
            method: "GET".to_string(),
            path: path.to_string(),
            description: description.to_string(),
        }
    }
}

/// Body of `GET /docs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocsResponse {
    pub title: String,
    pub description: String,
    pub endpoints: Vec<EndpointDoc>,
}

impl Default for DocsResponse {
    fn default() -> Self {
        Self {
            title: "Lunar and Solar Eclipse API".to_string(),
            description: "A simple API for eclipse data".to_string(),
            endpoints: vec![
                EndpointDoc::get("/", "Welcome message"),
                EndpointDoc::get("/health", "Service and dataset status"),
                EndpointDoc::get("/eclipses", "All eclipses in dataset order"),
                EndpointDoc::get(
                    "/eclipses/next",
                    "Next eclipse on or after today; 404 if none",
                ),
                EndpointDoc::get(
                    "/eclipses/{type}",
                    "Eclipses whose type matches 'solar' or 'lunar'; 400 for other types",
                ),
            ],
        }
    }
}
