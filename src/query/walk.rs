//! Depth-first walk shared by every query

use std::collections::HashSet;
use std::hash::Hash;
use std::ops::ControlFlow;

use crate::graph::{VertexGraph, VertexId};

/// Outcome of a walk
#[derive(Debug, Clone)]
pub(crate) struct Walk<N> {
    /// Every node handed to the visitor
    pub visited: HashSet<N>,
    /// True when the visitor stopped the walk early
    pub stopped: bool,
}

/// Walk depth-first from `start`, visiting each reachable node exactly once
///
/// Nodes are visited in the same pre-order a recursive walk produces: a node
/// before its neighbors, neighbors in sequence order. A node is marked before
/// its neighbors are expanded, so cycles and self-references terminate. The
/// walk uses an explicit stack and is safe on arbitrarily deep graphs.
///
/// `neighbors` should only yield nodes that can be expanded; dead ends are
/// the caller's to filter out. Returning `ControlFlow::Break` from `visit`
/// stops the walk.
pub(crate) fn depth_first<N, I, F, V>(start: Option<N>, mut neighbors: F, mut visit: V) -> Walk<N>
where
    N: Eq + Hash + Clone,
    I: IntoIterator<Item = N>,
    F: FnMut(&N) -> I,
    V: FnMut(&N) -> ControlFlow<()>,
{
    let mut visited: HashSet<N> = HashSet::new();
    let mut stack: Vec<N> = start.into_iter().collect();
    let mut pending: Vec<N> = Vec::new();

    while let Some(node) = stack.pop() {
        if visited.contains(&node) {
            continue;
        }
        visited.insert(node.clone());

        if visit(&node).is_break() {
            return Walk {
                visited,
                stopped: true,
            };
        }

        // Reverse so the first neighbor is popped first
        pending.extend(neighbors(&node));
        stack.extend(pending.drain(..).rev());
    }

    Walk {
        visited,
        stopped: false,
    }
}

/// Walk a vertex graph, treating ids outside the graph as absent
pub(crate) fn walk_vertices<T, V>(
    graph: &VertexGraph<T>,
    start: Option<VertexId>,
    visit: V,
) -> Walk<VertexId>
where
    V: FnMut(&VertexId) -> ControlFlow<()>,
{
    let start = start.filter(|id| graph.contains(*id));
    depth_first(
        start,
        move |id| {
            graph
                .neighbors(*id)
                .iter()
                .copied()
                .filter(move |n| graph.contains(*n))
        },
        visit,
    )
}
