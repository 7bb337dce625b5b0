//! Graph documents: JSON or YAML files describing one of the graph shapes

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use super::airport::AirportNetwork;
use super::error::{GraphError, GraphResult};
use super::vertex::{VertexGraph, VertexId};

/// On-disk encoding of a graph document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Pick a format from the file extension
    pub fn from_path(path: &Path) -> GraphResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            _ => Err(GraphError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl std::str::FromStr for Format {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            other => Err(GraphError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Parse a document from a string
pub fn parse_document<D: DeserializeOwned>(content: &str, format: Format) -> GraphResult<D> {
    let document = match format {
        Format::Json => serde_json::from_str(content)?,
        Format::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(document)
}

/// Read and parse a document, using the extension when no format is given
pub fn load_document<D: DeserializeOwned>(path: &Path, format: Option<Format>) -> GraphResult<D> {
    let format = match format {
        Some(format) => format,
        None => Format::from_path(path)?,
    };
    let content = std::fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), ?format, "loading graph document");
    parse_document(&content, format)
}

/// Map graph document: `{ key: [neighbor, ...] }`
pub type MapDocument = BTreeMap<String, Vec<String>>;

/// One vertex of a [`WordGraphDocument`]; neighbors are indices into the vertex list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordEntry {
    pub data: String,
    #[serde(default)]
    pub neighbors: Vec<usize>,
}

/// A vertex graph of words
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordGraphDocument {
    pub vertices: Vec<WordEntry>,
}

impl WordGraphDocument {
    /// Build the graph, rejecting neighbor indices outside the vertex list
    pub fn into_graph(self) -> GraphResult<VertexGraph<String>> {
        let mut graph = VertexGraph::new();
        let mut edges = Vec::new();

        for entry in self.vertices {
            let id = graph.add_vertex(entry.data);
            edges.extend(
                entry
                    .neighbors
                    .into_iter()
                    .map(|n| (id, VertexId::from_index(n))),
            );
        }
        for (from, to) in edges {
            graph.add_neighbor(from, to)?;
        }

        Ok(graph)
    }
}

/// A flight network described by airport codes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightDocument {
    /// Airports without flights may be listed here; others are implied by `flights`
    #[serde(default)]
    pub airports: Vec<String>,
    /// Direct flights as `[from, to]` code pairs
    #[serde(default)]
    pub flights: Vec<(String, String)>,
}

impl FlightDocument {
    pub fn into_network(self) -> AirportNetwork {
        AirportNetwork::from_routes(self.airports, self.flights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::from_path(Path::new("g.json")).unwrap(), Format::Json);
        assert_eq!(Format::from_path(Path::new("g.YML")).unwrap(), Format::Yaml);
        assert!(matches!(
            Format::from_path(Path::new("g.toml")),
            Err(GraphError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_word_graph_from_json() {
        let doc: WordGraphDocument = parse_document(
            r#"{"vertices": [{"data": "cat", "neighbors": [1, 0]}, {"data": "horse"}]}"#,
            Format::Json,
        )
        .unwrap();
        let graph = doc.into_graph().unwrap();

        assert_eq!(graph.len(), 2);
        let cat = VertexId::from_index(0);
        assert_eq!(graph.neighbors(cat), &[VertexId::from_index(1), cat]);
    }

    #[test]
    fn test_word_graph_rejects_dangling_index() {
        let doc = WordGraphDocument {
            vertices: vec![WordEntry {
                data: "cat".into(),
                neighbors: vec![3],
            }],
        };

        assert!(matches!(
            doc.into_graph(),
            Err(GraphError::UnknownVertex(id)) if id.index() == 3
        ));
    }

    #[test]
    fn test_flight_document_from_yaml() {
        let doc: FlightDocument = parse_document(
            "airports: [ANC]\nflights:\n  - [SEA, PDX]\n  - [PDX, SEA]\n",
            Format::Yaml,
        )
        .unwrap();
        let network = doc.into_network();

        assert_eq!(network.len(), 3);
        let sea = network.find_by_code("SEA").unwrap();
        let pdx = network.find_by_code("PDX").unwrap();
        assert_eq!(network.outbound_flights(&pdx), &[sea]);
    }

    #[test]
    fn test_load_map_document_from_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"a": ["b"], "b": [], "c": ["zz"]}}"#).unwrap();

        let doc: MapDocument = load_document(file.path(), None).unwrap();
        assert_eq!(doc.len(), 3);
        assert_eq!(doc["c"], vec!["zz".to_string()]);
    }

    #[test]
    fn test_load_with_explicit_format() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "a: [b]\nb: []\n").unwrap();

        assert!(load_document::<MapDocument>(file.path(), None).is_err());
        let doc: MapDocument = load_document(file.path(), Some(Format::Yaml)).unwrap();
        assert_eq!(doc["a"], vec!["b".to_string()]);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_document::<MapDocument>(Path::new("/nonexistent/graph.json"), None);
        assert!(matches!(result, Err(GraphError::Io(_))));
    }
}
