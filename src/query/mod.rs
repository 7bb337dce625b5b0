//! Reachability and aggregation queries
//!
//! Every query is a single depth-first walk with a fresh visited-set, so
//! each reachable node is processed once and cyclic graphs terminate.
//! The walk itself is internal; only the queries are exported:
//!
//! ```compile_fail
//! use graphwalk::query::depth_first;
//! ```

mod loops;
mod reach;
mod unreachable;
mod walk;
mod words;

pub use loops::{print_self_loopers, self_loopers, write_self_loopers};
pub use reach::can_reach;
pub use unreachable::unreachable;
pub use words::{longest_word, print_short_words, short_words, write_short_words};
