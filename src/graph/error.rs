//! Errors raised while building or loading graphs
//!
//! Queries never fail; only construction, document loading and output do.

use super::airport::AirportId;
use super::vertex::VertexId;
use thiserror::Error;

/// Errors that can occur in graphwalk operations
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Vertex not found: {0}")]
    UnknownVertex(VertexId),

    #[error("Airport not found: {0}")]
    UnknownAirport(AirportId),

    #[error("No airport with code: {0}")]
    UnknownCode(String),

    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for graphwalk operations
pub type GraphResult<T> = Result<T, GraphError>;
