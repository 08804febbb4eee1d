use route_finder::report::{
    format_duration, render_adjacency, render_city_info, render_city_list, render_comparison,
    render_pareto_table, render_route, render_routes, render_stats,
};
use route_finder::{compare_all, City, Flight, FlightNetwork, Route, SearchConfig};

fn create_network() -> FlightNetwork {
    colored::control::set_override(false);

    let mut network = FlightNetwork::new();
    network.add_city(City {
        code: "KHI".to_string(),
        name: "Karachi".to_string(),
        airport_name: "Jinnah International".to_string(),
        country: "Pakistan".to_string(),
        timezone: "Asia/Karachi".to_string(),
        latitude: 24.9,
        longitude: 67.2,
    });
    network.add_city(City::new("DXB", "Dubai"));
    network.add_city(City::new("LHR", "London"));
    network.add_flight(
        "KHI",
        Flight::new("DXB", "EK601", 2.5, 180.0)
            .with_airline("Emirates")
            .with_schedule("04:25", "05:40")
            .with_aircraft("B777", 42),
    );
    network.add_flight("DXB", Flight::new("LHR", "EK1", 7.5, 520.0).with_airline("Emirates"));
    network.add_flight("KHI", Flight::new("LHR", "PK785", 8.5, 900.0).with_airline("PIA"));
    network
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(7.5), "7.5 hours");
    assert_eq!(format_duration(27.0), "27.0 hours (1d 3h)");
}

#[test]
fn test_render_route_details() {
    let network = create_network();
    let routes = network.cheapest_routes("KHI", "LHR", &SearchConfig::default());
    let text = render_route(&network, &routes[0], "CHEAPEST");

    assert!(text.contains("Total Cost: $700.00"));
    assert!(text.contains("Number of Stops: 1"));
    assert!(text.contains("Flight 1: EK601"));
    assert!(text.contains("Karachi (KHI) -> Dubai (DXB)"));
    assert!(text.contains("Departure: 04:25 | Arrival: 05:40"));
    assert!(text.contains("Aircraft: B777 | Seats: 42"));
    assert!(text.contains("Layover at Dubai (DXB)"));
    assert!(!text.contains("Layover at London"), "No layover after the last leg");
}

#[test]
fn test_render_empty_results() {
    let network = create_network();
    assert!(render_route(&network, &Route::empty(), "X").contains("No route found!"));
    assert!(render_routes(&[], "CHEAPEST").contains("No routes found for CHEAPEST."));
    assert!(render_pareto_table(&[]).contains("No Pareto-Optimal routes found!"));
}

#[test]
fn test_render_route_lists() {
    let network = create_network();
    let pareto = network.pareto_routes("KHI", "LHR", &SearchConfig::default());
    let table = render_pareto_table(&pareto);

    assert!(table.contains("1."));
    assert!(table.contains("$700.00"));
    assert!(table.contains("2."));
    assert!(table.contains("KHI -> LHR"));

    let list = render_routes(&pareto, "PARETO");
    assert!(list.contains("(2 found)"));
    assert!(list.contains("Path: KHI -> DXB -> LHR"));
}

#[test]
fn test_render_comparison() {
    let network = create_network();
    let comparison = compare_all(&network, "KHI", "LHR", &SearchConfig::default());
    let text = render_comparison(&network, &comparison);

    assert!(text.contains("ALL OPTIMAL CHEAPEST ROUTES"));
    assert!(text.contains("ALL OPTIMAL FASTEST ROUTES"));
    assert!(text.contains("MINIMUM STOPS (BFS)"));
    assert!(text.contains("Recommendation:"));
}

#[test]
fn test_render_network_listings() {
    let network = create_network();

    let stats = render_stats(&network, &network.stats(5));
    assert!(stats.contains("Total Cities: 3"));
    assert!(stats.contains("Total Flights: 3"));
    assert!(stats.contains("1. Karachi (KHI) - 2 outbound flights"));

    let list = render_city_list(&network);
    let dxb = list.find("DXB").unwrap();
    let khi = list.find("KHI").unwrap();
    assert!(dxb < khi, "Cities are listed by code");
    assert!(list.contains("Total: 3 cities"));

    let info = render_city_info(&network, "KHI");
    assert!(info.contains("Airport: Jinnah International"));
    assert!(render_city_info(&network, "XXX").contains("City not found: XXX"));

    let dump = render_adjacency(&network);
    assert!(dump.contains("KHI (2 outbound flights):"));
    assert!(dump.contains("[EK601] DXB (Air Time: 2.5h, Cost: $180, Dep: 04:25, Arr: 05:40)"));
}
