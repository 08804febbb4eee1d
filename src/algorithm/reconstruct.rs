use log::{debug, warn};

use crate::graph::{Flight, FlightNetwork, NodeId, Route};

/// Candidate predecessors per node, indexed by `NodeId`: every
/// `(predecessor, flight)` pair tied for the node's best distance.
pub type Candidates<'a> = [Vec<(NodeId, &'a Flight)>];

/// Enumerates every path from `source` to `target` through the candidate
/// predecessors, in the order the candidates were recorded.
///
/// Runs as an explicit depth-first walk over one path buffer. A predecessor
/// already on the current path is skipped, so zero-weight cycles cannot
/// loop forever. At most `max_routes` routes are produced.
pub fn all_paths(
    network: &FlightNetwork,
    source: NodeId,
    target: NodeId,
    candidates: &Candidates<'_>,
    max_routes: usize,
) -> Vec<Route> {
    if source == target {
        return vec![Route::trivial(network.code(source))];
    }

    let mut routes = Vec::new();
    let mut on_path = vec![false; candidates.len().max(network.node_count())];

    // `nodes[i]` is the node at depth i counted back from the target;
    // `legs[i]` is the flight arriving at `nodes[i]`.
    let mut nodes: Vec<NodeId> = vec![target];
    let mut legs: Vec<&Flight> = Vec::new();
    let mut cursor: Vec<usize> = vec![0];
    on_path[target] = true;

    while let Some(&node) = nodes.last() {
        let depth = nodes.len() - 1;
        let options = candidates.get(node).map(Vec::as_slice).unwrap_or(&[]);
        let next = cursor[depth];

        if next == 0 && options.is_empty() {
            debug!("No predecessor recorded for {}; dropping branch", network.code(node));
        }

        if next >= options.len() {
            on_path[node] = false;
            nodes.pop();
            cursor.pop();
            legs.pop();
            continue;
        }

        cursor[depth] += 1;
        let (pred, flight) = options[next];
        if pred != source && on_path[pred] {
            continue;
        }

        legs.push(flight);
        if pred == source {
            routes.push(finish(network, source, &nodes, &legs));
            legs.pop();
            if routes.len() >= max_routes {
                warn!(
                    "Route enumeration from {} to {} stopped at {} routes",
                    network.code(source),
                    network.code(target),
                    max_routes
                );
                break;
            }
        } else {
            nodes.push(pred);
            cursor.push(0);
            on_path[pred] = true;
        }
    }

    routes
}

/// Turns the reverse-order buffers into a chronological route
fn finish(network: &FlightNetwork, source: NodeId, nodes: &[NodeId], legs: &[&Flight]) -> Route {
    let cities = std::iter::once(source)
        .chain(nodes.iter().rev().copied())
        .map(|id| network.code(id).to_string())
        .collect();
    let flights = legs.iter().rev().map(|f| (*f).clone()).collect();
    Route::from_legs(cities, flights)
}
