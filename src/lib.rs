//! graphwalk: depth-first queries over small graphs
//!
//! Five read-only queries over three graph shapes:
//!
//! - **Vertex graphs** ([`VertexGraph`]): vertices carrying data and an
//!   ordered neighbor list. Used by [`short_words`], [`longest_word`] and
//!   [`self_loopers`].
//! - **Flight networks** ([`AirportNetwork`]): airports with outbound
//!   flights. Used by [`can_reach`].
//! - **Map graphs** (any [`Adjacency`], e.g. `HashMap<T, Vec<T>>`). Used by
//!   [`unreachable`].
//!
//! # Example
//!
//! ```
//! use graphwalk::{longest_word, VertexGraph};
//!
//! let mut graph = VertexGraph::new();
//! let cat = graph.add_vertex("cat");
//! let horse = graph.add_vertex("horse");
//! graph.add_neighbor(cat, horse).unwrap();
//! graph.add_neighbor(horse, cat).unwrap();
//!
//! assert_eq!(longest_word(&graph, Some(cat)), "horse");
//! ```

pub mod graph;
pub mod query;

pub use graph::{
    load_document, parse_document, Adjacency, Airport, AirportId, AirportNetwork, FlightDocument,
    Format, GraphError, GraphResult, MapDocument, Vertex, VertexGraph, VertexId, WordEntry,
    WordGraphDocument,
};
pub use query::{
    can_reach, longest_word, print_self_loopers, print_short_words, self_loopers, short_words,
    unreachable, write_self_loopers, write_short_words,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
