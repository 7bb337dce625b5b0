//! Self-loop detection over vertex graphs

use std::fmt::Display;
use std::io::{self, Write};
use std::ops::ControlFlow;
use tracing::debug;

use super::walk::walk_vertices;
use crate::graph::{VertexGraph, VertexId};

/// Data of every reachable vertex that lists itself as a direct neighbor
///
/// Only direct self-edges count; a vertex on a longer cycle is not reported.
/// Each qualifying vertex appears once, in depth-first pre-order.
pub fn self_loopers<T>(graph: &VertexGraph<T>, start: Option<VertexId>) -> Vec<&T> {
    let mut loopers = Vec::new();

    let walk = walk_vertices(graph, start, |id| {
        if let Some(vertex) = graph.get(*id) {
            if vertex.neighbors.contains(id) {
                loopers.push(&vertex.data);
            }
        }
        ControlFlow::Continue(())
    });

    debug!(visited = walk.visited.len(), found = loopers.len(), "self-loop walk finished");
    loopers
}

/// Write the data of each self-looping vertex on its own line
pub fn write_self_loopers<T, W>(
    graph: &VertexGraph<T>,
    start: Option<VertexId>,
    out: &mut W,
) -> io::Result<()>
where
    T: Display,
    W: Write,
{
    for data in self_loopers(graph, start) {
        writeln!(out, "{}", data)?;
    }
    Ok(())
}

/// Print the data of each self-looping vertex to standard output
pub fn print_self_loopers<T: Display>(
    graph: &VertexGraph<T>,
    start: Option<VertexId>,
) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_self_loopers(graph, start, &mut out)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_self_loop_reported_once() {
        let mut graph = VertexGraph::new();
        let a = graph.add_vertex(1);
        let b = graph.add_vertex(2);
        graph.add_neighbor(a, a).unwrap();
        graph.add_neighbor(a, b).unwrap();
        graph.add_neighbor(a, a).unwrap();

        assert_eq!(self_loopers(&graph, Some(a)), vec![&1]);
    }

    #[test]
    fn test_two_cycle_is_not_a_self_loop() {
        let mut graph = VertexGraph::new();
        let a = graph.add_vertex("a");
        let b = graph.add_vertex("b");
        graph.add_neighbor(a, b).unwrap();
        graph.add_neighbor(b, a).unwrap();

        assert!(self_loopers(&graph, Some(a)).is_empty());
    }

    #[test]
    fn test_self_loopers_only_reachable() {
        let mut graph = VertexGraph::new();
        let a = graph.add_vertex("a");
        let b = graph.add_vertex("b");
        let c = graph.add_vertex("c");
        graph.add_neighbor(a, b).unwrap();
        graph.add_neighbor(b, b).unwrap();
        graph.add_neighbor(c, c).unwrap();

        assert_eq!(self_loopers(&graph, Some(a)), vec![&"b"]);
        assert_eq!(self_loopers(&graph, Some(c)), vec![&"c"]);
    }

    #[test]
    fn test_isolated_vertex_without_neighbors() {
        let mut graph = VertexGraph::new();
        let a = graph.add_vertex("a");

        assert!(self_loopers(&graph, Some(a)).is_empty());
        assert!(self_loopers(&graph, None).is_empty());
    }

    #[test]
    fn test_write_self_loopers() {
        let mut graph = VertexGraph::new();
        let a = graph.add_vertex("loop");
        let b = graph.add_vertex("spin");
        graph.add_neighbor(a, b).unwrap();
        graph.add_neighbor(a, a).unwrap();
        graph.add_neighbor(b, b).unwrap();
        let mut out = Vec::new();

        write_self_loopers(&graph, Some(a), &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "loop\nspin\n");
    }
}
