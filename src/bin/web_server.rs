use clap::Parser;
use route_finder::web::server::{start_server, ServerConfig};
use route_finder::{FlightNetwork, SearchConfig};
use std::path::PathBuf;

/// HTTP API over a flight network
#[derive(Debug, Parser)]
#[command(name = "web_server", version)]
struct Args {
    /// Port to listen on
    #[arg(default_value_t = 3005)]
    port: u16,

    /// Cities file
    #[arg(long, default_value = "cities.json")]
    cities: PathBuf,

    /// Flights file
    #[arg(long, default_value = "flights.json")]
    flights: PathBuf,

    /// Maximum routes returned per query
    #[arg(long, default_value_t = 10_000)]
    max_routes: usize,

    /// Disable CORS headers
    #[arg(long)]
    no_cors: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();
    let network = FlightNetwork::from_json_files(&args.cities, &args.flights)?;

    let config = ServerConfig {
        port: args.port,
        enable_cors: !args.no_cors,
        search: SearchConfig::default().with_max_routes(args.max_routes),
    };

    println!("🔧 Starting Route Finder Web Server...");
    println!("⚙️  Configuration:");
    println!("   📡 Port: {}", config.port);
    println!("   🌐 CORS enabled: {}", config.enable_cors);
    println!("   🗺️  Cities: {} | Flights: {}", network.city_count(), network.flight_count());
    println!();

    start_server(network, config).await?;

    Ok(())
}
