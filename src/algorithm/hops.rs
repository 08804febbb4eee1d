use std::collections::VecDeque;

use crate::algorithm::RouteSearch;
use crate::graph::{Flight, FlightNetwork, Route};

/// Breadth-first search for the itinerary with the fewest legs.
///
/// Only one route is produced; among equally short ones the first discovered
/// in adjacency order wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct HopSearch;

impl HopSearch {
    pub fn new() -> Self {
        HopSearch
    }

    /// The fewest-leg route, or `Route::empty()` when the target is unreachable
    pub fn route(&self, network: &FlightNetwork, source: &str, target: &str) -> Route {
        if source == target {
            return Route::trivial(source);
        }
        let (Some(s), Some(t)) = (network.node_id(source), network.node_id(target)) else {
            return Route::empty();
        };

        let n = network.node_count();
        let mut visited = vec![false; n];
        let mut parent: Vec<Option<(usize, &Flight)>> = vec![None; n];
        let mut queue = VecDeque::new();

        visited[s] = true;
        queue.push_back(s);

        while let Some(u) = queue.pop_front() {
            if u == t {
                break;
            }
            for (v, flight) in network.outgoing(u) {
                if !visited[v] {
                    visited[v] = true;
                    parent[v] = Some((u, flight));
                    queue.push_back(v);
                }
            }
        }

        if !visited[t] {
            return Route::empty();
        }

        let mut cities = vec![network.code(t).to_string()];
        let mut flights = Vec::new();
        let mut current = t;
        while let Some((prev, flight)) = parent[current] {
            flights.push(flight.clone());
            cities.push(network.code(prev).to_string());
            current = prev;
        }
        cities.reverse();
        flights.reverse();

        Route::from_legs(cities, flights)
    }
}

impl RouteSearch for HopSearch {
    fn name(&self) -> &'static str {
        "Minimum stops"
    }

    fn find_routes(&self, network: &FlightNetwork, source: &str, target: &str) -> Vec<Route> {
        let route = self.route(network, source, target);
        if route.is_empty() {
            Vec::new()
        } else {
            vec![route]
        }
    }
}
