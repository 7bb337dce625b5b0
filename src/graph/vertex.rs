//! Vertex graph: data-carrying vertices with ordered neighbor lists

use serde::{Deserialize, Serialize};

use super::error::{GraphError, GraphResult};

/// Identity of a vertex within a [`VertexGraph`]
///
/// Two vertices holding equal data are still different vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(usize);

impl VertexId {
    /// Create a VertexId from a raw slot index
    pub fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw slot index
    pub fn index(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// A vertex holding a value and the vertices it points to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex<T> {
    /// Value carried by the vertex
    pub data: T,
    /// Outgoing neighbors in insertion order (duplicates and self-references allowed)
    #[serde(default)]
    pub neighbors: Vec<VertexId>,
}

impl<T> Vertex<T> {
    /// Create a vertex with no neighbors
    pub fn new(data: T) -> Self {
        Self {
            data,
            neighbors: Vec::new(),
        }
    }
}

/// A free-form directed graph of vertices, possibly cyclic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexGraph<T> {
    vertices: Vec<Vertex<T>>,
}

impl<T> Default for VertexGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> VertexGraph<T> {
    /// Create an empty graph
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Add a vertex and return its identity
    pub fn add_vertex(&mut self, data: T) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.vertices.push(Vertex::new(data));
        id
    }

    /// Append `to` to the neighbor list of `from`
    ///
    /// Both vertices must belong to this graph. Repeating an edge or pointing
    /// a vertex at itself is allowed.
    pub fn add_neighbor(&mut self, from: VertexId, to: VertexId) -> GraphResult<()> {
        if !self.contains(to) {
            return Err(GraphError::UnknownVertex(to));
        }
        let vertex = self
            .vertices
            .get_mut(from.0)
            .ok_or(GraphError::UnknownVertex(from))?;
        vertex.neighbors.push(to);
        Ok(())
    }

    /// Get a vertex by identity
    pub fn get(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.vertices.get(id.0)
    }

    /// Check whether the identity belongs to this graph
    pub fn contains(&self, id: VertexId) -> bool {
        id.0 < self.vertices.len()
    }

    /// Neighbors of a vertex, empty when the vertex is unknown
    pub fn neighbors(&self, id: VertexId) -> &[VertexId] {
        self.get(id).map(|v| v.neighbors.as_slice()).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterate over all vertices with their identities
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &Vertex<T>)> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(index, vertex)| (VertexId(index), vertex))
    }
}
