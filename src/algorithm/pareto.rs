use log::{debug, warn};
use ordered_float::OrderedFloat;

use crate::algorithm::RouteSearch;
use crate::config::SearchConfig;
use crate::data_structures::MinQueue;
use crate::graph::{Flight, FlightNetwork, NodeId, Route};

/// A `(cost, duration)` pair reachable at some node, with the flight that
/// produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Label<'a> {
    pub cost: f64,
    pub duration: f64,
    /// `(previous node, flight taken)`; `None` only for the origin label
    pub parent: Option<(NodeId, &'a Flight)>,
}

impl<'a> Label<'a> {
    pub fn new(cost: f64, duration: f64) -> Self {
        Label {
            cost,
            duration,
            parent: None,
        }
    }

    /// No worse on both criteria and strictly better on at least one
    pub fn dominates(&self, other: &Label<'_>) -> bool {
        self.cost <= other.cost
            && self.duration <= other.duration
            && (self.cost < other.cost || self.duration < other.duration)
    }

    fn same_totals(&self, other: &Label<'_>) -> bool {
        self.cost == other.cost && self.duration == other.duration
    }

    fn matches(&self, cost: f64, duration: f64, tolerance: f64) -> bool {
        (self.cost - cost).abs() <= tolerance && (self.duration - duration).abs() <= tolerance
    }
}

/// Queue payload: the label values are kept so stale entries can be recognised
type Entry = (OrderedFloat<f64>, OrderedFloat<f64>, NodeId);

/// Multi-objective labeling search keeping a non-dominated frontier of
/// `(cost, duration)` labels per node.
///
/// The queue is ordered by `cost + duration`. That ordering only guides the
/// exploration; the frontiers are exact because every popped label that is
/// still current gets fully relaxed.
#[derive(Debug, Clone, Default)]
pub struct ParetoSearch {
    config: SearchConfig,
}

impl ParetoSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Computes the final frontier of every node reachable from `source`
    pub fn frontiers<'a>(&self, network: &'a FlightNetwork, source: NodeId) -> Vec<Vec<Label<'a>>> {
        let tolerance = self.config.label_epsilon;
        let mut labels: Vec<Vec<Label<'a>>> = vec![Vec::new(); network.node_count()];
        let mut queue: MinQueue<Entry, OrderedFloat<f64>> = MinQueue::new();

        labels[source].push(Label::new(0.0, 0.0));
        queue.push((OrderedFloat(0.0), OrderedFloat(0.0), source), OrderedFloat(0.0));

        while let Some(((cost, duration, u), _)) = queue.pop() {
            // Copy out the still-current labels; relaxation may touch `labels[u]`
            // itself through a self-loop.
            let current: Vec<Label<'a>> = labels[u]
                .iter()
                .filter(|l| l.matches(cost.0, duration.0, tolerance))
                .cloned()
                .collect();

            for label in &current {
                for (v, flight) in network.outgoing(u) {
                    let candidate = Label {
                        cost: label.cost + flight.cost_usd,
                        duration: label.duration + flight.duration_hours,
                        parent: Some((u, flight)),
                    };

                    let frontier = &mut labels[v];
                    if frontier.iter().any(|existing| existing.dominates(&candidate)) {
                        continue;
                    }
                    frontier.retain(|existing| !candidate.dominates(existing));
                    if frontier.iter().any(|existing| existing.same_totals(&candidate)) {
                        continue;
                    }

                    queue.push(
                        (OrderedFloat(candidate.cost), OrderedFloat(candidate.duration), v),
                        OrderedFloat(candidate.cost + candidate.duration),
                    );
                    frontier.push(candidate);
                }
            }
        }

        debug!(
            "Pareto search from {}: {} labels pushed",
            network.code(source),
            queue.pushes()
        );

        labels
    }

    /// Walks a target label back to the origin by matching parent labels.
    ///
    /// Returns `None` when some parent label cannot be found, which means the
    /// frontier is inconsistent; the caller drops that route.
    fn rebuild<'a>(
        &self,
        network: &FlightNetwork,
        labels: &[Vec<Label<'a>>],
        source: NodeId,
        target: NodeId,
        end: &Label<'a>,
    ) -> Option<Route> {
        let tolerance = self.config.label_epsilon;
        let step_limit: usize = labels.iter().map(Vec::len).sum();

        let mut nodes = vec![target];
        let mut flights: Vec<Flight> = Vec::new();
        let mut node = target;
        let mut label = end.clone();

        while node != source {
            let (prev, flight) = label.parent?;
            flights.push(flight.clone());
            nodes.push(prev);
            if prev == source {
                break;
            }
            if flights.len() > step_limit {
                return None;
            }

            let expected_cost = label.cost - flight.cost_usd;
            let expected_duration = label.duration - flight.duration_hours;
            label = labels[prev]
                .iter()
                .find(|l| l.matches(expected_cost, expected_duration, tolerance))?
                .clone();
            node = prev;
        }

        nodes.reverse();
        flights.reverse();
        let cities = nodes.into_iter().map(|id| network.code(id).to_string()).collect();
        Some(Route::from_legs(cities, flights))
    }

    /// Rebuilds one route per label on the target frontier, sorted by
    /// `(cost, duration)` and capped at `max_routes`.
    ///
    /// Labels whose parent chain cannot be matched are dropped.
    pub fn routes_to(
        &self,
        network: &FlightNetwork,
        labels: &[Vec<Label<'_>>],
        source: NodeId,
        target: NodeId,
    ) -> Vec<Route> {
        let mut routes: Vec<Route> = labels[target]
            .iter()
            .filter_map(|end| {
                let route = self.rebuild(network, labels, source, target, end);
                if route.is_none() {
                    debug!(
                        "Dropped inconsistent label ({}, {}) at {}",
                        end.cost,
                        end.duration,
                        network.code(target)
                    );
                }
                route
            })
            .collect();

        routes.sort_by(|a, b| {
            a.total_cost
                .total_cmp(&b.total_cost)
                .then_with(|| a.total_duration.total_cmp(&b.total_duration))
        });
        if routes.len() > self.config.max_routes {
            warn!(
                "Pareto frontier from {} to {} truncated to {} of {} routes",
                network.code(source),
                network.code(target),
                self.config.max_routes,
                routes.len()
            );
            routes.truncate(self.config.max_routes);
        }
        routes
    }
}

impl RouteSearch for ParetoSearch {
    fn name(&self) -> &'static str {
        "Pareto-optimal"
    }

    fn find_routes(&self, network: &FlightNetwork, source: &str, target: &str) -> Vec<Route> {
        if source == target {
            return vec![Route::trivial(source)];
        }
        let (Some(s), Some(t)) = (network.node_id(source), network.node_id(target)) else {
            return Vec::new();
        };

        let labels = self.frontiers(network, s);
        self.routes_to(network, &labels, s, t)
    }
}
