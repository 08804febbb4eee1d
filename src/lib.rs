//! Route Finder - multi-criteria itinerary search over a flight network
//!
//! The engine answers four kinds of query between two airports: the cheapest
//! itineraries, the fastest itineraries, the itinerary with the fewest legs,
//! and the full Pareto frontier trading total cost against total duration.
//! Single-criterion searches return every tied optimum, not one representative.

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod graph;
pub mod report;
pub mod web;

pub use algorithm::{
    compare::{compare_all, Comparison, Recommendation},
    hops::HopSearch,
    multi_path::{Metric, MultiPathDijkstra},
    pareto::ParetoSearch,
    Criterion, RouteSearch,
};
pub use config::SearchConfig;
/// Re-export main types for convenient use
pub use graph::{City, Flight, FlightNetwork, Route};

use std::path::PathBuf;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not find '{collection}' array in {path}")]
    MissingCollection {
        path: PathBuf,
        collection: &'static str,
    },

    #[error("No usable '{collection}' records in {path}")]
    EmptyCollection {
        path: PathBuf,
        collection: &'static str,
    },

    #[error("Unknown search criterion: {0}")]
    UnknownCriterion(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
