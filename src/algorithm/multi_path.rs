use log::debug;
use ordered_float::OrderedFloat;

use crate::algorithm::reconstruct;
use crate::algorithm::RouteSearch;
use crate::config::SearchConfig;
use crate::data_structures::MinQueue;
use crate::graph::{Flight, FlightNetwork, NodeId, Route};

/// Which flight weight a single-criterion search minimises first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Minimise total cost, break ties on duration
    Cost,
    /// Minimise total duration, break ties on cost
    Duration,
}

impl Metric {
    /// `(primary, secondary)` weights of a flight under this metric
    fn weights(self, flight: &Flight) -> (f64, f64) {
        match self {
            Metric::Cost => (flight.cost_usd, flight.duration_hours),
            Metric::Duration => (flight.duration_hours, flight.cost_usd),
        }
    }
}

/// Outcome of relaxing one flight against the best known distance pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Relaxation {
    /// Strictly better: reset the candidate list
    Replace,
    /// Tied on both criteria: one more candidate predecessor
    Append,
    Discard,
}

/// Dijkstra over a lexicographic `(primary, secondary)` distance that keeps
/// every predecessor tied for the optimum, so all optimal itineraries can be
/// rebuilt rather than one representative.
#[derive(Debug, Clone)]
pub struct MultiPathDijkstra {
    metric: Metric,
    config: SearchConfig,
}

impl MultiPathDijkstra {
    /// Create a search minimising `metric` with default tolerances
    pub fn new(metric: Metric) -> Self {
        MultiPathDijkstra {
            metric,
            config: SearchConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    fn classify(&self, new: (f64, f64), best: (f64, f64)) -> Relaxation {
        let eps = self.config.epsilon;
        if new.0 < best.0 - eps {
            Relaxation::Replace
        } else if (new.0 - best.0).abs() <= eps {
            if new.1 < best.1 - eps {
                Relaxation::Replace
            } else if (new.1 - best.1).abs() <= eps {
                Relaxation::Append
            } else {
                Relaxation::Discard
            }
        } else {
            Relaxation::Discard
        }
    }

    /// Runs the relaxation to exhaustion from `source` and returns the best
    /// `(primary, secondary)` distance plus the candidate predecessors of every node
    fn settle<'a>(
        &self,
        network: &'a FlightNetwork,
        source: NodeId,
    ) -> (Vec<(f64, f64)>, Vec<Vec<(NodeId, &'a Flight)>>) {
        let n = network.node_count();
        let eps = self.config.epsilon;

        let mut best = vec![(f64::INFINITY, f64::INFINITY); n];
        let mut candidates: Vec<Vec<(NodeId, &Flight)>> = vec![Vec::new(); n];
        best[source] = (0.0, 0.0);

        let mut queue = MinQueue::new();
        queue.push(source, (OrderedFloat(0.0), OrderedFloat(0.0)));

        while let Some((u, (popped_primary, popped_secondary))) = queue.pop() {
            let (primary_u, secondary_u) = best[u];

            // Stale entry: the node has improved since this was pushed
            if popped_primary.0 > primary_u + eps {
                continue;
            }
            if (popped_primary.0 - primary_u).abs() <= eps
                && popped_secondary.0 > secondary_u + eps
            {
                continue;
            }

            for (v, flight) in network.outgoing(u) {
                let (w1, w2) = self.metric.weights(flight);
                let candidate = (primary_u + w1, secondary_u + w2);

                match self.classify(candidate, best[v]) {
                    Relaxation::Replace => {
                        best[v] = candidate;
                        candidates[v].clear();
                        candidates[v].push((u, flight));
                        queue.push(v, (OrderedFloat(candidate.0), OrderedFloat(candidate.1)));
                    }
                    Relaxation::Append => candidates[v].push((u, flight)),
                    Relaxation::Discard => {}
                }
            }
        }

        debug!(
            "{:?} search from {}: {} queue pushes over {} nodes",
            self.metric,
            network.code(source),
            queue.pushes(),
            n
        );

        (best, candidates)
    }
}

impl RouteSearch for MultiPathDijkstra {
    fn name(&self) -> &'static str {
        match self.metric {
            Metric::Cost => "Cheapest",
            Metric::Duration => "Fastest",
        }
    }

    fn find_routes(&self, network: &FlightNetwork, source: &str, target: &str) -> Vec<Route> {
        if source == target {
            return vec![Route::trivial(source)];
        }
        let (Some(s), Some(t)) = (network.node_id(source), network.node_id(target)) else {
            return Vec::new();
        };

        let (best, candidates) = self.settle(network, s);
        if best[t].0.is_infinite() {
            return Vec::new();
        }

        reconstruct::all_paths(network, s, t, &candidates, self.config.max_routes)
    }
}
