pub mod generators;
pub mod loader;
pub mod network;
pub mod types;

pub use loader::{load_cities, load_flights, LoadReport, SkippedRecord};
pub use network::{FlightNetwork, NetworkStats, NodeId};
pub use types::{City, Flight, Route};
