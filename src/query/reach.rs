//! Point-to-point reachability over flight networks

use std::ops::ControlFlow;
use tracing::debug;

use super::walk::depth_first;
use crate::graph::{AirportId, AirportNetwork};

/// Whether `destination` can be reached from `start` by zero or more flights
///
/// Identical endpoints (including two absent ones) are always reachable.
/// An absent endpoint otherwise makes the destination unreachable. The walk
/// stops as soon as the destination is found.
pub fn can_reach(
    network: &AirportNetwork,
    start: Option<&AirportId>,
    destination: Option<&AirportId>,
) -> bool {
    // Quick checks
    if start == destination {
        return true;
    }
    let (Some(start), Some(destination)) = (start, destination) else {
        return false;
    };

    let walk = depth_first(
        Some(*start),
        |id| network.outbound_flights(id).iter().copied(),
        |id| {
            if id == destination {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        },
    );

    debug!(
        visited = walk.visited.len(),
        found = walk.stopped,
        "reachability walk finished"
    );
    walk.stopped
}
