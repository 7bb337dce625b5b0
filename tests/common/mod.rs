//! Common test utilities for graphwalk integration tests
//!
//! Builders for the graph shapes used across the query tests.

#![allow(dead_code)]

use graphwalk::{AirportId, AirportNetwork, VertexGraph, VertexId};
use std::collections::HashMap;

/// A word graph together with the ids of its vertices in insertion order
pub struct BuiltGraph {
    pub graph: VertexGraph<String>,
    pub ids: Vec<VertexId>,
}

impl BuiltGraph {
    pub fn id(&self, index: usize) -> Option<VertexId> {
        self.ids.get(index).copied()
    }
}

/// Build a word graph from words and `(from, to)` index pairs
pub fn build_word_graph(words: &[&str], edges: &[(usize, usize)]) -> BuiltGraph {
    let mut graph = VertexGraph::new();
    let ids: Vec<VertexId> = words.iter().map(|w| graph.add_vertex(w.to_string())).collect();
    for &(from, to) in edges {
        graph
            .add_neighbor(ids[from], ids[to])
            .expect("edge endpoints exist");
    }
    BuiltGraph { graph, ids }
}

/// Build a flight network from `(from, to)` code pairs
pub fn build_network(flights: &[(&str, &str)]) -> AirportNetwork {
    AirportNetwork::from_routes(Vec::<&str>::new(), flights.iter().copied())
}

pub fn airport(network: &AirportNetwork, code: &str) -> AirportId {
    network
        .find_by_code(code)
        .unwrap_or_else(|| panic!("no airport {}", code))
}

/// Build a map graph from `(key, [neighbor])` entries
pub fn build_map_graph(entries: &[(&str, &[&str])]) -> HashMap<String, Vec<String>> {
    entries
        .iter()
        .map(|(key, neighbors)| {
            (
                key.to_string(),
                neighbors.iter().map(|n| n.to_string()).collect(),
            )
        })
        .collect()
}
