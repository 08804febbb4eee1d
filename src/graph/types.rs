use serde::{Deserialize, Serialize};

/// Airport metadata. Only used for presentation, never by the searches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub airport_name: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub timezone: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

impl City {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        City {
            code: code.into(),
            name: name.into(),
            ..Default::default()
        }
    }
}

/// A directed flight leg. Owned by the adjacency list of its departure city.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    /// Arrival city code
    pub destination: String,
    /// Opaque label; not required to be unique
    pub flight_number: String,
    pub duration_hours: f64,
    pub cost_usd: f64,
    #[serde(default)]
    pub airline: String,
    #[serde(default)]
    pub departure_time: String,
    #[serde(default)]
    pub arrival_time: String,
    #[serde(default)]
    pub aircraft: String,
    #[serde(default)]
    pub seats_available: u32,
}

impl Flight {
    /// Creates a flight leg with the two search weights and no schedule details
    pub fn new(
        destination: impl Into<String>,
        flight_number: impl Into<String>,
        duration_hours: f64,
        cost_usd: f64,
    ) -> Self {
        Flight {
            destination: destination.into(),
            flight_number: flight_number.into(),
            duration_hours,
            cost_usd,
            ..Default::default()
        }
    }

    pub fn with_airline(mut self, airline: impl Into<String>) -> Self {
        self.airline = airline.into();
        self
    }

    pub fn with_schedule(
        mut self,
        departure: impl Into<String>,
        arrival: impl Into<String>,
    ) -> Self {
        self.departure_time = departure.into();
        self.arrival_time = arrival.into();
        self
    }

    pub fn with_aircraft(mut self, aircraft: impl Into<String>, seats_available: u32) -> Self {
        self.aircraft = aircraft.into();
        self.seats_available = seats_available;
        self
    }
}

/// A concrete itinerary produced by path reconstruction.
///
/// `cities.len() == flights.len() + 1` for every non-empty route, with
/// `cities[0]` the origin and the last city the destination.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub cities: Vec<String>,
    pub flights: Vec<Flight>,
    pub total_cost: f64,
    pub total_duration: f64,
    /// Intermediate layovers: legs minus one, floored at zero
    pub stops: usize,
}

impl Route {
    /// Builds a route from its legs, recomputing every aggregate from the flights
    pub fn from_legs(cities: Vec<String>, flights: Vec<Flight>) -> Self {
        debug_assert_eq!(cities.len(), flights.len() + 1);
        let total_cost = flights.iter().map(|f| f.cost_usd).sum();
        let total_duration = flights.iter().map(|f| f.duration_hours).sum();
        let stops = flights.len().saturating_sub(1);
        Route {
            cities,
            flights,
            total_cost,
            total_duration,
            stops,
        }
    }

    /// The zero-leg route from a city to itself
    pub fn trivial(city: impl Into<String>) -> Self {
        Route::from_legs(vec![city.into()], Vec::new())
    }

    /// The "no route" value returned by the hop search for unreachable targets
    pub fn empty() -> Self {
        Route::default()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn origin(&self) -> Option<&str> {
        self.cities.first().map(String::as_str)
    }

    pub fn destination(&self) -> Option<&str> {
        self.cities.last().map(String::as_str)
    }

    /// Flight numbers in travel order
    pub fn flight_numbers(&self) -> Vec<&str> {
        self.flights.iter().map(|f| f.flight_number.as_str()).collect()
    }
}
