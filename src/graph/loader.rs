//! Loading of `cities.json` / `flights.json`.
//!
//! A malformed record is skipped with a warning and loading continues. Only a
//! missing file, unparsable JSON, or a missing/empty top-level array aborts.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;
use serde_json::Value;

use crate::graph::network::FlightNetwork;
use crate::graph::types::{City, Flight};
use crate::{Error, Result};

/// A record that was dropped during loading
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    /// Position of the record inside its array
    pub index: usize,
    pub reason: String,
}

/// Outcome of loading one collection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: Vec<SkippedRecord>,
}

#[derive(Debug, Deserialize)]
struct CityRecord {
    #[serde(default)]
    code: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    airport_name: String,
    #[serde(default)]
    country: String,
    #[serde(default)]
    timezone: String,
    #[serde(default)]
    latitude: f64,
    #[serde(default)]
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct FlightRecord {
    #[serde(default)]
    source: String,
    #[serde(default)]
    destination: String,
    #[serde(default)]
    flight_number: String,
    #[serde(default)]
    airline: String,
    #[serde(default)]
    departure_time: String,
    #[serde(default)]
    arrival_time: String,
    #[serde(default)]
    aircraft: String,
    #[serde(default)]
    duration_hours: f64,
    #[serde(default)]
    cost_usd: f64,
    #[serde(default, deserialize_with = "lenient_count")]
    seats_available: u32,
}

/// Seat counts are display-only: any number is floored and clamped into
/// range, a numeric string is parsed, and anything else reads as 0.
fn lenient_count<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let number = match &value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(match number {
        Some(n) if n.is_finite() => n.floor().clamp(0.0, u32::MAX as f64) as u32,
        _ => 0,
    })
}

impl CityRecord {
    fn into_city(self) -> std::result::Result<City, String> {
        if self.code.is_empty() || self.name.is_empty() {
            return Err("missing code or name".to_string());
        }
        Ok(City {
            code: self.code,
            name: self.name,
            airport_name: self.airport_name,
            country: self.country,
            timezone: self.timezone,
            latitude: self.latitude,
            longitude: self.longitude,
        })
    }
}

impl FlightRecord {
    fn into_flight(self) -> std::result::Result<(String, Flight), String> {
        if self.source.is_empty() || self.destination.is_empty() || self.flight_number.is_empty() {
            return Err("missing source, destination or flight_number".to_string());
        }
        if self.cost_usd < 0.0 || self.duration_hours < 0.0 {
            return Err(format!(
                "flight {} has a negative weight (cost {}, duration {})",
                self.flight_number, self.cost_usd, self.duration_hours
            ));
        }
        let flight = Flight {
            destination: self.destination,
            flight_number: self.flight_number,
            duration_hours: self.duration_hours,
            cost_usd: self.cost_usd,
            airline: self.airline,
            departure_time: self.departure_time,
            arrival_time: self.arrival_time,
            aircraft: self.aircraft,
            seats_available: self.seats_available,
        };
        Ok((self.source, flight))
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Locates the top-level array `collection` and returns its elements
fn collection_items(json: &str, path: &Path, collection: &'static str) -> Result<Vec<Value>> {
    let root: Value = serde_json::from_str(json).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;
    match root {
        Value::Object(mut map) => match map.remove(collection) {
            Some(Value::Array(items)) => Ok(items),
            _ => Err(Error::MissingCollection {
                path: path.to_path_buf(),
                collection,
            }),
        },
        _ => Err(Error::MissingCollection {
            path: path.to_path_buf(),
            collection,
        }),
    }
}

/// Deserializes each element, handing valid ones to `accept` and recording the rest
fn load_records<R, T>(
    items: Vec<Value>,
    path: &Path,
    collection: &'static str,
    convert: impl Fn(R) -> std::result::Result<T, String>,
    mut accept: impl FnMut(T),
) -> Result<LoadReport>
where
    R: for<'de> Deserialize<'de>,
{
    let mut report = LoadReport::default();
    for (index, item) in items.into_iter().enumerate() {
        let parsed = serde_json::from_value::<R>(item)
            .map_err(|e| e.to_string())
            .and_then(&convert);
        match parsed {
            Ok(record) => {
                accept(record);
                report.loaded += 1;
            }
            Err(reason) => {
                warn!("Skipped incomplete {} record #{}: {}", collection, index, reason);
                report.skipped.push(SkippedRecord { index, reason });
            }
        }
    }

    if report.loaded == 0 {
        return Err(Error::EmptyCollection {
            path: path.to_path_buf(),
            collection,
        });
    }
    info!(
        "Loaded {} {} from {} ({} skipped)",
        report.loaded,
        collection,
        path.display(),
        report.skipped.len()
    );
    Ok(report)
}

/// Adds every valid city of a `{"cities": [...]}` document to the network
pub fn load_cities_from_str(
    network: &mut FlightNetwork,
    json: &str,
    origin: &Path,
) -> Result<LoadReport> {
    let items = collection_items(json, origin, "cities")?;
    load_records(items, origin, "cities", CityRecord::into_city, |city| {
        network.add_city(city)
    })
}

/// Adds every valid flight of a `{"flights": [...]}` document to the network
pub fn load_flights_from_str(
    network: &mut FlightNetwork,
    json: &str,
    origin: &Path,
) -> Result<LoadReport> {
    let items = collection_items(json, origin, "flights")?;
    load_records(
        items,
        origin,
        "flights",
        FlightRecord::into_flight,
        |(source, flight)| network.add_flight(&source, flight),
    )
}

pub fn load_cities(network: &mut FlightNetwork, path: impl AsRef<Path>) -> Result<LoadReport> {
    let path = path.as_ref();
    let json = read_file(path)?;
    load_cities_from_str(network, &json, path)
}

pub fn load_flights(network: &mut FlightNetwork, path: impl AsRef<Path>) -> Result<LoadReport> {
    let path = path.as_ref();
    let json = read_file(path)?;
    load_flights_from_str(network, &json, path)
}

impl FlightNetwork {
    /// Builds a network from a cities file and a flights file
    pub fn from_json_files(
        cities: impl Into<PathBuf>,
        flights: impl Into<PathBuf>,
    ) -> Result<Self> {
        let mut network = FlightNetwork::new();
        load_cities(&mut network, cities.into())?;
        load_flights(&mut network, flights.into())?;
        Ok(network)
    }
}
