//! Unreachable keys of map-based graphs

use std::collections::HashSet;
use std::hash::Hash;
use std::ops::ControlFlow;
use tracing::debug;

use super::walk::depth_first;
use crate::graph::Adjacency;

/// Keys of `graph` that cannot be reached from `starting`
///
/// `starting` reaches itself, so it is never part of the result. Neighbor
/// values that are not keys are dead ends. When `starting` is absent or not
/// a key, every key is unreachable.
pub fn unreachable<T, G>(graph: &G, starting: Option<&T>) -> HashSet<T>
where
    T: Eq + Hash + Clone,
    G: Adjacency<T> + ?Sized,
{
    let start = starting.filter(|s| graph.contains(*s));

    let walk = depth_first(
        start,
        move |key| {
            graph
                .neighbors(*key)
                .unwrap_or_default()
                .iter()
                .filter(move |n| graph.contains(*n))
        },
        |_| ControlFlow::Continue(()),
    );

    let unvisited: HashSet<T> = graph
        .keys()
        .filter(|key| !walk.visited.contains(key))
        .cloned()
        .collect();

    debug!(
        reachable = walk.visited.len(),
        unreachable = unvisited.len(),
        "unreachable walk finished"
    );
    unvisited
}
