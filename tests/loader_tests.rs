use route_finder::graph::loader::{load_cities_from_str, load_flights_from_str};
use route_finder::graph::{load_cities, load_flights};
use route_finder::{Error, FlightNetwork, SearchConfig};
use std::io::Write;
use std::path::Path;

const CITIES: &str = r#"{
  "cities": [
    {"code": "KHI", "name": "Karachi", "airport_name": "Jinnah International",
     "country": "Pakistan", "timezone": "Asia/Karachi", "latitude": 24.9065, "longitude": 67.1608},
    {"code": "DXB", "name": "Dubai", "airport_name": "Dubai International", "country": "UAE",
     "timezone": "Asia/Dubai", "latitude": 25.2532, "longitude": 55.3657},
    {"code": "LHR", "name": "London"},
    {"name": "Nameless code"},
    {"code": "ISB", "name": "Islamabad", "latitude": "north"}
  ]
}"#;

const FLIGHTS: &str = r#"{
  "flights": [
    {"source": "KHI", "destination": "DXB", "flight_number": "EK601", "airline": "Emirates",
     "departure_time": "04:25", "arrival_time": "05:40", "aircraft": "B777", "duration_hours": 2.25,
     "cost_usd": 180, "seats_available": 42},
    {"source": "DXB", "destination": "LHR", "flight_number": "EK1", "airline": "Emirates",
     "duration_hours": 7.5, "cost_usd": 520},
    {"source": "KHI", "destination": "LHR", "flight_number": "PK785", "airline": "PIA",
     "duration_hours": 8.5, "cost_usd": 900},
    {"source": "KHI", "destination": "DXB", "airline": "Ghost Air",
     "duration_hours": 1, "cost_usd": 1},
    {"source": "KHI", "destination": "LHR", "flight_number": "NEG1",
     "duration_hours": 1, "cost_usd": -5}
  ]
}"#;

fn origin() -> &'static Path {
    Path::new("memory.json")
}

#[test]
fn test_load_skips_incomplete_records() {
    let mut network = FlightNetwork::new();

    let cities = load_cities_from_str(&mut network, CITIES, origin()).unwrap();
    assert_eq!(cities.loaded, 3);
    assert_eq!(cities.skipped.len(), 2);
    assert_eq!(cities.skipped[0].index, 3);
    assert_eq!(cities.skipped[1].index, 4, "A wrongly typed field skips the record");

    let flights = load_flights_from_str(&mut network, FLIGHTS, origin()).unwrap();
    assert_eq!(flights.loaded, 3);
    let skipped: Vec<usize> = flights.skipped.iter().map(|s| s.index).collect();
    assert_eq!(skipped, vec![3, 4]);

    assert_eq!(network.city_count(), 3);
    assert_eq!(network.flight_count(), 3);
}

#[test]
fn test_loaded_fields_and_defaults() {
    let mut network = FlightNetwork::new();
    load_cities_from_str(&mut network, CITIES, origin()).unwrap();
    load_flights_from_str(&mut network, FLIGHTS, origin()).unwrap();

    let karachi = network.city("KHI").unwrap();
    assert_eq!(karachi.airport_name, "Jinnah International");
    assert_eq!(karachi.latitude, 24.9065);

    let london = network.city("LHR").unwrap();
    assert_eq!(london.timezone, "");
    assert_eq!(london.longitude, 0.0);

    let routes = network.cheapest_routes("KHI", "LHR", &SearchConfig::default());
    assert_eq!(routes.len(), 1);
    let first = &routes[0].flights[0];
    assert_eq!(first.flight_number, "EK601");
    assert_eq!(first.aircraft, "B777");
    assert_eq!(first.seats_available, 42);
    assert_eq!(first.departure_time, "04:25");
    assert_eq!(routes[0].flights[1].seats_available, 0);
    assert_eq!(routes[0].total_cost, 700.0);
}

#[test]
fn test_missing_collection_fails() {
    let mut network = FlightNetwork::new();
    let err = load_flights_from_str(&mut network, r#"{"routes": []}"#, origin()).unwrap_err();
    assert!(matches!(err, Error::MissingCollection { collection: "flights", .. }));

    let err = load_cities_from_str(&mut network, r#"[1, 2, 3]"#, origin()).unwrap_err();
    assert!(matches!(err, Error::MissingCollection { collection: "cities", .. }));
}

#[test]
fn test_empty_collection_fails() {
    let mut network = FlightNetwork::new();
    let err = load_flights_from_str(&mut network, r#"{"flights": []}"#, origin()).unwrap_err();
    assert!(matches!(err, Error::EmptyCollection { collection: "flights", .. }));

    // Nothing usable is the same as nothing at all
    let json = r#"{"cities": [{"name": "x"}]}"#;
    let err = load_cities_from_str(&mut network, json, origin()).unwrap_err();
    assert!(matches!(err, Error::EmptyCollection { collection: "cities", .. }));
}

#[test]
fn test_invalid_json_fails() {
    let mut network = FlightNetwork::new();
    let err = load_cities_from_str(&mut network, "{ not json", origin()).unwrap_err();
    assert!(matches!(err, Error::Json { .. }));
}

#[test]
fn test_load_from_files() {
    let mut cities = tempfile::NamedTempFile::new().unwrap();
    cities.write_all(CITIES.as_bytes()).unwrap();
    let mut flights = tempfile::NamedTempFile::new().unwrap();
    flights.write_all(FLIGHTS.as_bytes()).unwrap();

    let network = FlightNetwork::from_json_files(cities.path(), flights.path()).unwrap();
    assert_eq!(network.city_count(), 3);
    assert_eq!(network.flight_count(), 3);

    let mut other = FlightNetwork::new();
    assert_eq!(load_cities(&mut other, cities.path()).unwrap().loaded, 3);
    assert_eq!(load_flights(&mut other, flights.path()).unwrap().loaded, 3);
}

#[test]
fn test_missing_file_fails() {
    let err = FlightNetwork::from_json_files("/definitely/not/here/cities.json", "flights.json")
        .unwrap_err();
    match err {
        Error::Io { path, .. } => assert!(path.ends_with("cities.json")),
        other => panic!("expected an I/O error, got {:?}", other),
    }
}

#[test]
fn test_sample_data_set() {
    let data = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    let (cities, flights) = (data.join("cities.json"), data.join("flights.json"));
    let network = FlightNetwork::from_json_files(cities, flights).unwrap();
    assert_eq!(network.city_count(), 8);
    assert_eq!(network.flight_count(), 20);

    // Two carriers sell the same transatlantic slot at the same fare
    let routes = network.cheapest_routes("LHR", "JFK", &SearchConfig::default());
    let mut numbers: Vec<&str> = routes
        .iter()
        .map(|r| r.flights[0].flight_number.as_str())
        .collect();
    numbers.sort();
    assert_eq!(numbers, vec!["BA117", "VS3"]);

    let pareto = network.pareto_routes("KHI", "JFK", &SearchConfig::default());
    assert!(pareto.len() >= 2);
    assert!(pareto.windows(2).all(|w| w[0].total_cost <= w[1].total_cost));
}

#[test]
fn test_seat_count_never_drops_a_flight() {
    let json = r#"{
      "flights": [
        {"source": "A", "destination": "B", "flight_number": "F1",
         "duration_hours": 1, "cost_usd": 10, "seats_available": 150.0},
        {"source": "B", "destination": "C", "flight_number": "F2",
         "duration_hours": 1, "cost_usd": 10, "seats_available": 12},
        {"source": "C", "destination": "D", "flight_number": "F3",
         "duration_hours": 1, "cost_usd": 10, "seats_available": "n/a"},
        {"source": "D", "destination": "E", "flight_number": "F4",
         "duration_hours": 1, "cost_usd": 10, "seats_available": -3.7}
      ]
    }"#;
    let mut network = FlightNetwork::new();
    let report = load_flights_from_str(&mut network, json, origin()).unwrap();
    assert_eq!(report.loaded, 4);
    assert!(report.skipped.is_empty());

    let routes = network.cheapest_routes("A", "E", &SearchConfig::default());
    assert_eq!(routes.len(), 1, "Every leg of the chain must be present");
    let seats: Vec<u32> = routes[0].flights.iter().map(|f| f.seats_available).collect();
    assert_eq!(seats, vec![150, 12, 0, 0]);
}
