//! Caller-built graph structures

mod adjacency;
mod airport;
mod document;
mod error;
mod vertex;


pub use adjacency::Adjacency;
pub use airport::{Airport, AirportId, AirportNetwork};
pub use document::{
    load_document, parse_document, FlightDocument, Format, MapDocument, WordEntry,
    WordGraphDocument,
};
pub use error::{GraphError, GraphResult};
pub use vertex::{Vertex, VertexGraph, VertexId};
