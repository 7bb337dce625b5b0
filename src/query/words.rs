//! Word queries over vertex graphs whose vertices hold words

use std::io::{self, Write};
use std::ops::ControlFlow;
use tracing::{debug, trace};

use super::walk::walk_vertices;
use crate::graph::{VertexGraph, VertexId};

/// Length in Unicode scalar values, so "café" is 4 and an emoji is 1
fn word_len(word: &str) -> usize {
    word.chars().count()
}

/// Words reachable from `start` (inclusive) that are strictly shorter than `k`
///
/// Words come back in depth-first pre-order, each vertex at most once.
/// Length counts Unicode scalar values (`chars()`), not bytes or UTF-16
/// units. Nothing is returned when `start` is absent or `k <= 0`.
pub fn short_words<T: AsRef<str>>(
    graph: &VertexGraph<T>,
    start: Option<VertexId>,
    k: i64,
) -> Vec<&T> {
    let mut words = Vec::new();
    if k <= 0 {
        return words;
    }
    let bound = usize::try_from(k).unwrap_or(usize::MAX);

    let walk = walk_vertices(graph, start, |id| {
        if let Some(vertex) = graph.get(*id) {
            trace!(vertex = %id, "visiting");
            if word_len(vertex.data.as_ref()) < bound {
                words.push(&vertex.data);
            }
        }
        ControlFlow::Continue(())
    });

    debug!(visited = walk.visited.len(), matched = words.len(), k, "short word walk finished");
    words
}

/// Write each short word on its own line
pub fn write_short_words<T, W>(
    graph: &VertexGraph<T>,
    start: Option<VertexId>,
    k: i64,
    out: &mut W,
) -> io::Result<()>
where
    T: AsRef<str>,
    W: Write,
{
    for word in short_words(graph, start, k) {
        writeln!(out, "{}", word.as_ref())?;
    }
    Ok(())
}

/// Print each short word on its own line to standard output
pub fn print_short_words<T: AsRef<str>>(
    graph: &VertexGraph<T>,
    start: Option<VertexId>,
    k: i64,
) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_short_words(graph, start, k, &mut out)?;
    out.flush()
}

/// The longest word reachable from `start`, including its own
///
/// Length counts Unicode scalar values, as in [`short_words`]. Ties go to
/// the word discovered first in depth-first pre-order. An absent start
/// yields the empty string.
pub fn longest_word<T: AsRef<str>>(graph: &VertexGraph<T>, start: Option<VertexId>) -> &str {
    let mut longest: Option<&str> = None;

    let walk = walk_vertices(graph, start, |id| {
        if let Some(vertex) = graph.get(*id) {
            let word = vertex.data.as_ref();
            match longest {
                Some(best) if word_len(word) <= word_len(best) => {}
                _ => longest = Some(word),
            }
        }
        ControlFlow::Continue(())
    });

    debug!(visited = walk.visited.len(), "longest word walk finished");
    longest.unwrap_or("")
}
