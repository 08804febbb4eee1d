use crate::graph::{City, Flight, FlightNetwork};
use rand::prelude::*;
use rand::rngs::StdRng;
use std::collections::HashSet;

/// Code of the i-th generated city
pub fn city_code(i: usize) -> String {
    format!("C{:03}", i)
}

fn random_flight(rng: &mut StdRng, to: usize, number: usize) -> Flight {
    // Cost loosely anti-correlated with duration so frontiers are non-trivial
    let duration: f64 = rng.gen_range(0.5..14.0);
    let fare: f64 = rng.gen_range(50.0..900.0);
    let cost = (fare / duration.sqrt()).round();
    Flight::new(city_code(to), format!("RF{}", number), (duration * 10.0).round() / 10.0, cost)
        .with_airline("Synthetic Air")
}

fn add_cities(network: &mut FlightNetwork, n: usize) {
    for i in 0..n {
        network.add_city(City::new(city_code(i), format!("City {}", i)));
    }
}

/// Random network with `n` cities and roughly `flights_per_city` departures each
pub fn generate_random_network(n: usize, flights_per_city: usize, seed: u64) -> FlightNetwork {
    assert!(n > 1, "n must be greater than 1");

    let mut network = FlightNetwork::new();
    let mut rng = StdRng::seed_from_u64(seed);
    add_cities(&mut network, n);

    let mut number = 100;
    for u in 0..n {
        for _ in 0..flights_per_city {
            let v = rng.gen_range(0..n);
            if u != v {
                let flight = random_flight(&mut rng, v, number);
                network.add_flight(&city_code(u), flight);
                number += 1;
            }
        }
    }

    network
}

/// Hub-and-spoke network grown by preferential attachment: each new city gets
/// `m` round trips to existing cities, favouring the busy ones
pub fn generate_hub_network(n: usize, m: usize, seed: u64) -> FlightNetwork {
    assert!(m > 0, "m must be positive");
    assert!(n > m, "n must be greater than m");

    let mut network = FlightNetwork::new();
    let mut rng = StdRng::seed_from_u64(seed);
    add_cities(&mut network, n);

    let mut number = 100;
    let mut connect = |network: &mut FlightNetwork, rng: &mut StdRng, a: usize, b: usize| {
        let out = random_flight(rng, b, number);
        let back = Flight {
            destination: city_code(a),
            flight_number: format!("RF{}", number + 1),
            ..out.clone()
        };
        network.add_flight(&city_code(a), out);
        network.add_flight(&city_code(b), back);
        number += 2;
    };

    // Fully connected seed
    for i in 0..m {
        for j in (i + 1)..m {
            connect(&mut network, &mut rng, i, j);
        }
    }

    let mut degrees = vec![m.saturating_sub(1).max(1); m];
    let mut total_degree: usize = degrees.iter().sum();

    for i in m..n {
        let mut targets = HashSet::new();
        while targets.len() < m {
            let mut pick = rng.gen_range(0..total_degree);
            let mut target = 0;
            while target < i && pick >= degrees[target] {
                pick -= degrees[target];
                target += 1;
            }
            if target < i && targets.insert(target) {
                connect(&mut network, &mut rng, i, target);
                degrees[target] += 1;
                total_degree += 1;
            }
        }
        degrees.push(m);
        total_degree += m;
    }

    network
}

/// A chain of `length` hops where every hop has `width` identical parallel
/// flights: `width^length` tied optimal itineraries from `C000` to the end
pub fn generate_tied_ladder(length: usize, width: usize) -> FlightNetwork {
    let mut network = FlightNetwork::new();
    add_cities(&mut network, length + 1);
    for hop in 0..length {
        for lane in 0..width {
            let flight = Flight::new(city_code(hop + 1), format!("L{}-{}", hop, lane), 1.0, 10.0);
            network.add_flight(&city_code(hop), flight);
        }
    }
    network
}
