use std::collections::HashMap;

use crate::algorithm::{HopSearch, Metric, MultiPathDijkstra, ParetoSearch, RouteSearch};
use crate::config::SearchConfig;
use crate::graph::types::{City, Flight, Route};

/// Dense index assigned to every city code that appears on a flight
pub type NodeId = usize;

/// Summary figures for the whole network
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct NetworkStats {
    pub total_cities: usize,
    pub total_flights: usize,
    /// Flights per city that has at least one departure
    pub average_routes_per_city: f64,
    /// `(code, outbound flights)`, busiest first
    pub top_hubs: Vec<(String, usize)>,
}

/// The flight network: adjacency lists keyed by interned city ids plus a side
/// table of city metadata.
///
/// Flights are append-only. Duplicates, self-loops and destinations without
/// metadata are all accepted; a destination nobody departs from is simply a
/// dead end for the searches.
#[derive(Debug, Clone, Default)]
pub struct FlightNetwork {
    /// Code of each interned node, indexed by `NodeId`
    codes: Vec<String>,
    ids: HashMap<String, NodeId>,
    /// Outgoing flights per node: `[(destination id, flight)]`
    outgoing: Vec<Vec<(NodeId, Flight)>>,
    cities: HashMap<String, City>,
    flight_count: usize,
}

impl FlightNetwork {
    /// Creates an empty network
    pub fn new() -> Self {
        Self::default()
    }

    fn intern(&mut self, code: &str) -> NodeId {
        if let Some(&id) = self.ids.get(code) {
            return id;
        }
        let id = self.codes.len();
        self.codes.push(code.to_string());
        self.ids.insert(code.to_string(), id);
        self.outgoing.push(Vec::new());
        id
    }

    /// Appends a flight departing from `source`
    pub fn add_flight(&mut self, source: &str, flight: Flight) {
        let from = self.intern(source);
        let to = self.intern(&flight.destination);
        self.outgoing[from].push((to, flight));
        self.flight_count += 1;
    }

    /// Inserts or replaces the metadata of a city
    pub fn add_city(&mut self, city: City) {
        self.cities.insert(city.code.clone(), city);
    }

    pub fn city(&self, code: &str) -> Option<&City> {
        self.cities.get(code)
    }

    /// `"Name (CODE)"` when the city is known, otherwise the bare code
    pub fn city_label(&self, code: &str) -> String {
        match self.cities.get(code) {
            Some(city) => format!("{} ({})", city.name, code),
            None => code.to_string(),
        }
    }

    /// Id of a code that appears on at least one flight
    pub fn node_id(&self, code: &str) -> Option<NodeId> {
        self.ids.get(code).copied()
    }

    pub fn code(&self, id: NodeId) -> &str {
        &self.codes[id]
    }

    /// Flights leaving `id`, in insertion order
    pub fn outgoing(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &Flight)> + '_ {
        self.outgoing
            .get(id)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(to, flight)| (*to, flight)))
    }

    /// Number of distinct codes mentioned by flights
    pub fn node_count(&self) -> usize {
        self.codes.len()
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    pub fn flight_count(&self) -> usize {
        self.flight_count
    }

    /// All known cities ordered by code
    pub fn cities_sorted(&self) -> Vec<&City> {
        let mut cities: Vec<&City> = self.cities.values().collect();
        cities.sort_by(|a, b| a.code.cmp(&b.code));
        cities
    }

    /// Every departure city with its flights, ordered by code
    pub fn adjacency_sorted(&self) -> Vec<(&str, Vec<&Flight>)> {
        let mut rows: Vec<(&str, Vec<&Flight>)> = self
            .outgoing
            .iter()
            .enumerate()
            .filter(|(_, edges)| !edges.is_empty())
            .map(|(id, edges)| (self.codes[id].as_str(), edges.iter().map(|(_, f)| f).collect()))
            .collect();
        rows.sort_by(|a, b| a.0.cmp(b.0));
        rows
    }

    /// Network statistics with the `top_n` busiest departure cities
    pub fn stats(&self, top_n: usize) -> NetworkStats {
        let mut hubs: Vec<(String, usize)> = self
            .outgoing
            .iter()
            .enumerate()
            .filter(|(_, edges)| !edges.is_empty())
            .map(|(id, edges)| (self.codes[id].clone(), edges.len()))
            .collect();
        let departure_cities = hubs.len();
        hubs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        hubs.truncate(top_n);

        NetworkStats {
            total_cities: self.cities.len(),
            total_flights: self.flight_count,
            average_routes_per_city: if departure_cities == 0 {
                0.0
            } else {
                self.flight_count as f64 / departure_cities as f64
            },
            top_hubs: hubs,
        }
    }

    /// Every itinerary tied for the lowest total cost
    pub fn cheapest_routes(&self, source: &str, target: &str, config: &SearchConfig) -> Vec<Route> {
        MultiPathDijkstra::new(Metric::Cost)
            .with_config(*config)
            .find_routes(self, source, target)
    }

    /// Every itinerary tied for the lowest total duration
    pub fn fastest_routes(&self, source: &str, target: &str, config: &SearchConfig) -> Vec<Route> {
        MultiPathDijkstra::new(Metric::Duration)
            .with_config(*config)
            .find_routes(self, source, target)
    }

    /// One itinerary with the fewest legs, or `None` when unreachable
    pub fn min_stops_route(&self, source: &str, target: &str) -> Option<Route> {
        let route = HopSearch::new().route(self, source, target);
        if route.is_empty() {
            None
        } else {
            Some(route)
        }
    }

    /// The non-dominated (cost, duration) itineraries, cheapest first
    pub fn pareto_routes(&self, source: &str, target: &str, config: &SearchConfig) -> Vec<Route> {
        ParetoSearch::new()
            .with_config(*config)
            .find_routes(self, source, target)
    }
}
