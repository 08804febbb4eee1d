//! Plain-text rendering of search results and network listings.
//!
//! Every function returns a `String` so the interactive shell and the tests
//! share the same output. Colours come from `colored` and disappear when
//! colouring is switched off (`colored::control::set_override(false)`).

use std::fmt::Display;

use colored::Colorize;

use crate::algorithm::compare::{Comparison, Recommendation};
use crate::graph::{FlightNetwork, NetworkStats, Route};

#[derive(Default)]
struct Buffer(String);

impl Buffer {
    fn line(&mut self, text: impl Display) {
        self.0.push_str(&text.to_string());
        self.0.push('\n');
    }

    fn rule(&mut self, ch: char, width: usize) {
        self.line(ch.to_string().repeat(width));
    }

    fn blank(&mut self) {
        self.0.push('\n');
    }
}

/// `"27.5 hours (1d 3h)"`; the day suffix only appears from 24 hours up
pub fn format_duration(hours: f64) -> String {
    if hours >= 24.0 {
        let whole = hours as u64;
        format!("{:.1} hours ({}d {}h)", hours, whole / 24, whole % 24)
    } else {
        format!("{:.1} hours", hours)
    }
}

/// Full itinerary with every leg, layover and the aircraft details
pub fn render_route(network: &FlightNetwork, route: &Route, title: &str) -> String {
    let mut out = Buffer::default();
    if route.is_empty() {
        out.line("No route found!".red());
        return out.0;
    }

    out.rule('-', 70);
    out.line(format!("  {}", title.bold()));
    out.rule('-', 70);
    out.line(format!("Total Cost: ${:.2}", route.total_cost));
    out.line(format!("Total Duration: {}", format_duration(route.total_duration)));
    out.line(format!("Number of Stops: {}", route.stops));
    out.rule('-', 70);
    out.blank();

    let legs = route.flights.len();
    for (i, flight) in route.flights.iter().enumerate() {
        out.line(format!("Flight {}: {}", i + 1, flight.flight_number.cyan()));
        out.line(format!(
            "   {} -> {}",
            network.city_label(&route.cities[i]),
            network.city_label(&flight.destination)
        ));
        out.line(format!("   Airline: {}", flight.airline));
        if !flight.departure_time.is_empty() {
            out.line(format!(
                "   Departure: {} | Arrival: {}",
                flight.departure_time, flight.arrival_time
            ));
        }
        out.line(format!(
            "   Duration: {:.1}h | Cost: ${:.2}",
            flight.duration_hours, flight.cost_usd
        ));
        if !flight.aircraft.is_empty() {
            if flight.seats_available > 0 {
                out.line(format!(
                    "   Aircraft: {} | Seats: {}",
                    flight.aircraft, flight.seats_available
                ));
            } else {
                out.line(format!("   Aircraft: {}", flight.aircraft));
            }
        }
        if i + 1 < legs {
            out.blank();
            out.line(format!("   Layover at {}", network.city_label(&flight.destination)).yellow());
            out.blank();
        }
    }
    out.rule('-', 70);
    out.0
}

/// Numbered summary of a set of tied optimal routes
pub fn render_routes(routes: &[Route], title: &str) -> String {
    let mut out = Buffer::default();
    if routes.is_empty() {
        out.line(format!("No routes found for {}.", title).red());
        return out.0;
    }

    out.rule('=', 60);
    out.line(format!(" ALL OPTIMAL {} ROUTES ({} found)", title, routes.len()).bold());
    out.rule('=', 60);
    for (i, route) in routes.iter().enumerate() {
        out.blank();
        out.line(format!("--- Route {}: ---", i + 1));
        out.line(format!("   Total Cost: ${:.2}", route.total_cost));
        out.line(format!("   Total Duration: {}", format_duration(route.total_duration)));
        out.line(format!("   Total Stops: {}", route.stops));
        out.line(format!("   Path: {}", route.cities.join(" -> ")));
        out.line(format!("   Flights: {}", route.flight_numbers().join(", ")));
    }
    out.0
}

/// Option table for the Pareto frontier; options are numbered from 1
pub fn render_pareto_table(routes: &[Route]) -> String {
    let mut out = Buffer::default();
    if routes.is_empty() {
        out.line("No Pareto-Optimal routes found!".red());
        return out.0;
    }

    out.rule('=', 70);
    out.line(" PARETO-OPTIMAL ROUTE OPTIONS (Non-Dominated)".bold());
    out.line(" (Best compromises between Cost and Duration)");
    out.rule('=', 70);
    out.line(format!(
        "{:<8}{:<15}{:<20}{:<10}{}",
        "OPTION", "TOTAL COST", "TOTAL DURATION", "STOPS", "PATH"
    ));
    out.rule('-', 70);
    for (i, route) in routes.iter().enumerate() {
        out.line(format!(
            "{:<8}{:<15}{:<20}{:<10}{}",
            format!("{}.", i + 1),
            format!("${:.2}", route.total_cost),
            format!("{:.2} hours", route.total_duration),
            route.stops,
            route.cities.join(" -> ")
        ));
    }
    out.rule('=', 70);
    out.0
}

/// Cheapest, fastest and minimum-stop results followed by the recommendation
pub fn render_comparison(network: &FlightNetwork, comparison: &Comparison) -> String {
    let mut out = String::new();
    out.push_str(&render_routes(&comparison.cheapest, "CHEAPEST"));
    out.push_str(&render_routes(&comparison.fastest, "FASTEST"));
    let min_stops = comparison.min_stops.clone().unwrap_or_default();
    out.push_str(&render_route(network, &min_stops, "MINIMUM STOPS (BFS)"));
    out.push('\n');
    out.push_str(&format!("Recommendation: {}\n", describe(&comparison.recommendation)));
    out
}

fn describe(recommendation: &Recommendation) -> String {
    match recommendation {
        Recommendation::BestValue { cost } => {
            format!("Choose the cheapest route (best value for money: ${:.2})", cost)
        }
        Recommendation::SavesTime { duration } => {
            format!(
                "Choose the fastest route (saves significant time: {})",
                format_duration(*duration)
            )
        }
        Recommendation::Balanced => "The routes are relatively balanced. Consider the minimum-stop \
             or Pareto-optimal options for a trade-off decision."
            .to_string(),
        Recommendation::Unavailable => {
            "Could not find all required routes for comparison.".to_string()
        }
    }
}

pub fn render_stats(network: &FlightNetwork, stats: &NetworkStats) -> String {
    let mut out = Buffer::default();
    out.line("NETWORK STATISTICS".bold());
    out.rule('-', 40);
    out.line(format!("Total Cities: {}", stats.total_cities));
    out.line(format!("Total Flights: {}", stats.total_flights));
    out.line(format!("Average Routes per City: {:.1}", stats.average_routes_per_city));
    out.blank();
    out.line("Top Hub Cities:");
    for (i, (code, flights)) in stats.top_hubs.iter().enumerate() {
        out.line(format!(
            "   {}. {} - {} outbound flights",
            i + 1,
            network.city_label(code),
            flights
        ));
    }
    out.0
}

pub fn render_city_list(network: &FlightNetwork) -> String {
    let mut out = Buffer::default();
    out.line("AVAILABLE CITIES".bold());
    out.rule('-', 70);
    let cities = network.cities_sorted();
    for city in &cities {
        out.line(format!("{:<6} - {}", city.code, city.name));
    }
    out.blank();
    out.line(format!("Total: {} cities", cities.len()));
    out.0
}

pub fn render_city_info(network: &FlightNetwork, code: &str) -> String {
    let mut out = Buffer::default();
    let Some(city) = network.city(code) else {
        out.line(format!("City not found: {}", code).red());
        return out.0;
    };
    out.rule('-', 50);
    out.line(format!("City: {} ({})", city.name.bold(), city.code));
    out.rule('-', 50);
    out.line(format!("Airport: {}", city.airport_name));
    out.line(format!("Country: {}", city.country));
    out.line(format!("Timezone: {}", city.timezone));
    out.line(format!("Coordinates: {}, {}", city.latitude, city.longitude));
    out.rule('-', 50);
    out.0
}

/// Every departure city and its flights, sorted by city code
pub fn render_adjacency(network: &FlightNetwork) -> String {
    let mut out = Buffer::default();
    out.line("--- ENTIRE FLIGHT GRAPH (ADJACENCY LIST) ---".bold());
    out.line("Format: SOURCE -> [Flight_Number] DESTINATION (Duration, Cost, Departure, Arrival)");
    for (code, flights) in network.adjacency_sorted() {
        out.blank();
        out.line(format!("{} ({} outbound flights):", code, flights.len()));
        for flight in flights {
            out.line(format!(
                "  - [{}] {} (Air Time: {:.1}h, Cost: ${:.0}, Dep: {}, Arr: {})",
                flight.flight_number,
                flight.destination,
                flight.duration_hours,
                flight.cost_usd,
                flight.departure_time,
                flight.arrival_time
            ));
        }
    }
    out.blank();
    out.rule('-', 44);
    out.0
}
