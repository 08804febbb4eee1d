use std::fmt;
use std::str::FromStr;

use crate::config::SearchConfig;
use crate::graph::{FlightNetwork, Route};
use crate::{Error, Result};

/// Trait for itinerary search engines
///
/// Implementations never mutate the network and keep all search state local
/// to a single call, so one network can serve many searches at once.
pub trait RouteSearch {
    /// Get the name of the search
    fn name(&self) -> &'static str;

    /// Find the itineraries from `source` to `target` this search considers optimal.
    ///
    /// An unreachable or unknown target yields an empty vector. When
    /// `source == target` the result is the single zero-leg route.
    fn find_routes(&self, network: &FlightNetwork, source: &str, target: &str) -> Vec<Route>;
}

/// What the traveller wants to optimise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Criterion {
    Cheapest,
    Fastest,
    MinStops,
    Pareto,
}

impl Criterion {
    pub const ALL: [Criterion; 4] = [
        Criterion::Cheapest,
        Criterion::Fastest,
        Criterion::MinStops,
        Criterion::Pareto,
    ];

    /// Runs the search matching this criterion
    pub fn search(
        self,
        network: &FlightNetwork,
        source: &str,
        target: &str,
        config: &SearchConfig,
    ) -> Vec<Route> {
        match self {
            Criterion::Cheapest => network.cheapest_routes(source, target, config),
            Criterion::Fastest => network.fastest_routes(source, target, config),
            Criterion::MinStops => network.min_stops_route(source, target).into_iter().collect(),
            Criterion::Pareto => network.pareto_routes(source, target, config),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Criterion::Cheapest => "cheapest",
            Criterion::Fastest => "fastest",
            Criterion::MinStops => "min-stops",
            Criterion::Pareto => "pareto",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Criterion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cheapest" | "cost" => Ok(Criterion::Cheapest),
            "fastest" | "duration" | "time" => Ok(Criterion::Fastest),
            "min-stops" | "min_stops" | "stops" | "hops" => Ok(Criterion::MinStops),
            "pareto" => Ok(Criterion::Pareto),
            other => Err(Error::UnknownCriterion(other.to_string())),
        }
    }
}
