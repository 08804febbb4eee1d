use serde::Serialize;

use crate::config::SearchConfig;
use crate::graph::{FlightNetwork, Route};

/// A cheapest route wins outright when it costs less than this share of the
/// fastest route's fare; the same ratio applies to durations the other way.
const DECISIVE_RATIO: f64 = 0.7;

/// Advice derived from comparing the cheapest and fastest itineraries
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Recommendation {
    /// The cheapest itinerary is markedly cheaper than the fastest one
    BestValue { cost: f64 },
    /// The fastest itinerary is markedly shorter than the cheapest one
    SavesTime { duration: f64 },
    /// Neither dominates clearly; look at the stops or the Pareto options
    Balanced,
    /// Cheapest or fastest search found nothing
    Unavailable,
}

/// Side-by-side results of the three single-answer searches
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub cheapest: Vec<Route>,
    pub fastest: Vec<Route>,
    pub min_stops: Option<Route>,
    pub recommendation: Recommendation,
}

/// Runs cheapest, fastest and minimum-stop searches over the same network.
///
/// The searches only read the network, so they run concurrently.
pub fn compare_all(
    network: &FlightNetwork,
    source: &str,
    target: &str,
    config: &SearchConfig,
) -> Comparison {
    let (cheapest, (fastest, min_stops)) = rayon::join(
        || network.cheapest_routes(source, target, config),
        || {
            rayon::join(
                || network.fastest_routes(source, target, config),
                || network.min_stops_route(source, target),
            )
        },
    );

    let recommendation = recommend(&cheapest, &fastest);
    Comparison {
        cheapest,
        fastest,
        min_stops,
        recommendation,
    }
}

/// Compares the first cheapest route against the first fastest route.
/// Every route in each list is tied on its primary metric, so the first is
/// representative.
pub fn recommend(cheapest: &[Route], fastest: &[Route]) -> Recommendation {
    let (Some(cheap), Some(fast)) = (cheapest.first(), fastest.first()) else {
        return Recommendation::Unavailable;
    };

    if cheap.total_cost < fast.total_cost * DECISIVE_RATIO {
        Recommendation::BestValue { cost: cheap.total_cost }
    } else if fast.total_duration < cheap.total_duration * DECISIVE_RATIO {
        Recommendation::SavesTime {
            duration: fast.total_duration,
        }
    } else {
        Recommendation::Balanced
    }
}
