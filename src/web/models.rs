use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::algorithm::compare::Comparison;
use crate::graph::Route;

/// Body of `POST /api/routes/search`
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    pub source: String,
    pub target: String,
    #[serde(default = "default_criterion")]
    pub criterion: String,
}

fn default_criterion() -> String {
    "pareto".to_string()
}

/// Body of `POST /api/routes/compare`
#[derive(Debug, Clone, Deserialize)]
pub struct CompareRequest {
    pub source: String,
    pub target: String,
}

/// Routes found by one search
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub query_id: Uuid,
    pub criterion: String,
    pub source: String,
    pub target: String,
    pub executed_at: DateTime<Utc>,
    pub execution_time_ms: f64,
    pub route_count: usize,
    /// Cheapest first for Pareto queries; tied optima otherwise
    pub routes: Vec<Route>,
}

/// Side-by-side comparison of the single-criterion searches
#[derive(Debug, Clone, Serialize)]
pub struct CompareResponse {
    pub query_id: Uuid,
    pub source: String,
    pub target: String,
    pub executed_at: DateTime<Utc>,
    pub execution_time_ms: f64,
    #[serde(flatten)]
    pub comparison: Comparison,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(error: &str, message: impl Into<String>) -> Self {
        ErrorResponse {
            error: error.to_string(),
            message: message.into(),
            details: None,
        }
    }
}
