use clap::Parser;
use log::LevelFilter;
use route_finder::report;
use route_finder::{compare_all, FlightNetwork, SearchConfig};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

const TARGET_PROMPT: &str = "Enter destination city code (e.g., LHR, DXB, JFK): ";

/// Interactive airline route finder
#[derive(Debug, Parser)]
#[command(name = "route_finder", version)]
struct Args {
    /// Cities file
    #[arg(long, default_value = "cities.json")]
    cities: PathBuf,

    /// Flights file
    #[arg(long, default_value = "flights.json")]
    flights: PathBuf,

    /// Tolerance for treating two totals as tied
    #[arg(long, default_value_t = 1e-9)]
    epsilon: f64,

    /// Maximum routes listed per query
    #[arg(long, default_value_t = 10_000)]
    max_routes: usize,

    /// Log search internals
    #[arg(short, long)]
    verbose: bool,
}

const MENU: &str = "
--------------------------------------------------
|      AIRLINE BOOKING SYSTEM                     |
--------------------------------------------------
1. Search Flights (Cheapest Route)
2. Search Flights (Fastest Route)
3. Search Flights (Minimum Stops)
4. Search Flights (Pareto-Optimal Routes)
5. Compare All Optimal Options
6. Display Network Stats
7. List All Cities
8. City Information
9. Display ENTIRE Flight Graph
0. Exit
------------------------------------------------
Enter choice: ";

/// Line-oriented access to stdin
struct Prompt<R: BufRead> {
    input: R,
}

impl<R: BufRead> Prompt<R> {
    /// Prints `question` and returns the trimmed answer, `None` at end of input
    fn ask(&mut self, question: &str) -> Option<String> {
        print!("{}", question);
        io::stdout().flush().ok()?;
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    fn ask_code(&mut self, question: &str) -> Option<String> {
        self.ask(question).map(|code| code.to_ascii_uppercase())
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    println!();
    println!("--------------------------------------------------");
    println!("           SMART AIRLINE ROUTE FINDER             ");
    println!("--------------------------------------------------");

    let network = match FlightNetwork::from_json_files(&args.cities, &args.flights) {
        Ok(network) => network,
        Err(err) => {
            eprintln!("\nFailed to load flight data: {}", err);
            return ExitCode::FAILURE;
        }
    };
    let config = SearchConfig::default()
        .with_epsilon(args.epsilon)
        .with_max_routes(args.max_routes);

    println!("{}", report::render_stats(&network, &network.stats(5)));

    let stdin = io::stdin();
    let mut prompt = Prompt { input: stdin.lock() };
    run(&network, &config, &mut prompt);

    println!("\nThank you for using Smart Airline Route Finder!");
    println!("Safe travels!\n");
    ExitCode::SUCCESS
}

fn run<R: BufRead>(network: &FlightNetwork, config: &SearchConfig, prompt: &mut Prompt<R>) {
    loop {
        let Some(choice) = prompt.ask(MENU) else { return };
        let choice: u32 = match choice.parse() {
            Ok(choice) => choice,
            Err(_) => {
                println!("\nInvalid choice! Please try again.");
                continue;
            }
        };
        if choice == 0 {
            return;
        }

        let endpoints = if (1..=5).contains(&choice) {
            let Some(source) = prompt.ask_code("\nEnter source city code (e.g., KHI, ISB, LHE): ")
            else {
                return;
            };
            let Some(target) = prompt.ask_code(TARGET_PROMPT) else {
                return;
            };
            println!("\nSearching for routes from {} to {}...", source, target);
            Some((source, target))
        } else {
            None
        };

        match (choice, endpoints) {
            (1, Some((s, t))) => {
                let routes = network.cheapest_routes(&s, &t, config);
                println!("{}", report::render_routes(&routes, "CHEAPEST"));
            }
            (2, Some((s, t))) => {
                let routes = network.fastest_routes(&s, &t, config);
                println!("{}", report::render_routes(&routes, "FASTEST"));
            }
            (3, Some((s, t))) => {
                let route = network.min_stops_route(&s, &t).unwrap_or_default();
                println!("{}", report::render_route(network, &route, "MINIMUM STOPS ROUTE (BFS)"));
            }
            (4, Some((s, t))) => {
                let routes = network.pareto_routes(&s, &t, config);
                println!("{}", report::render_pareto_table(&routes));
                if !routes.is_empty() {
                    pick_pareto_option(network, &routes, prompt);
                }
            }
            (5, Some((s, t))) => {
                println!("\nFinding all optimal routes...");
                let comparison = compare_all(network, &s, &t, config);
                println!("{}", report::render_comparison(network, &comparison));
            }
            (6, _) => println!("{}", report::render_stats(network, &network.stats(5))),
            (7, _) => println!("{}", report::render_city_list(network)),
            (8, _) => {
                let Some(code) = prompt.ask_code("\nEnter city code: ") else { return };
                println!("{}", report::render_city_info(network, &code));
            }
            (9, _) => println!("{}", report::render_adjacency(network)),
            _ => {
                println!("\nInvalid choice! Please try again.");
                continue;
            }
        }

        if prompt.ask("Press Enter to continue...").is_none() {
            return;
        }
    }
}

fn pick_pareto_option<R: BufRead>(
    network: &FlightNetwork,
    routes: &[route_finder::Route],
    prompt: &mut Prompt<R>,
) {
    let question = "\nEnter option number for full details, or 0 to return to menu: ";
    let Some(answer) = prompt.ask(question) else {
        return;
    };
    match answer.parse::<usize>() {
        Ok(0) => {}
        Ok(option) if option <= routes.len() => {
            let title = format!("PARETO OPTIMAL ROUTE (Option {})", option);
            println!("{}", report::render_route(network, &routes[option - 1], &title));
        }
        _ => println!("Invalid option."),
    }
}
