use std::sync::Arc;

use clap::{Parser, Subcommand};
use skysearch_airports::nearest_within;
use skysearch_core::Coordinates;
use skysearch_resolver::{SearchPipeline, SessionContext, StaticLocationProvider};

#[derive(Debug, Parser)]
#[command(name = "skysearch")]
#[command(about = "Skysearch command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve a free-text flight query into a results URL.
    Resolve {
        /// The query, e.g. "fly to Tokyo tomorrow morning".
        query: String,
        /// Device latitude for departure fallback.
        #[arg(long, requires = "lng")]
        lat: Option<f64>,
        /// Device longitude for departure fallback.
        #[arg(long, requires = "lat")]
        lng: Option<f64>,
        /// Print the full outcome as JSON instead of plain text.
        #[arg(long)]
        json: bool,
    },
    /// Look up the nearest airport to a coordinate.
    Nearest {
        #[arg(long)]
        lat: f64,
        #[arg(long)]
        lng: f64,
        /// Search radius in kilometres.
        #[arg(long, default_value_t = 150.0)]
        radius_km: f64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Resolve {
            query,
            lat,
            lng,
            json,
        } => resolve(&query, lat, lng, json).await,
        Commands::Nearest {
            lat,
            lng,
            radius_km,
        } => {
            nearest(lat, lng, radius_km);
            Ok(())
        }
    }
}

async fn resolve(query: &str, lat: Option<f64>, lng: Option<f64>, json: bool) -> anyhow::Result<()> {
    let config = skysearch_core::load_app_config()?;
    let mut pipeline = SearchPipeline::from_config(&config)
        .map_err(|e| anyhow::anyhow!("query parser client setup failed: {e}"))?;

    let coords = match (lat, lng) {
        (Some(lat), Some(lng)) => Some(Coordinates::new(lat, lng)),
        _ => None,
    };
    if let Some(position) = coords {
        // The flag doubles as the live position source, so departure
        // resolution behaves the same as a device submission.
        pipeline = pipeline.with_locator(Arc::new(StaticLocationProvider(position)));
    }

    let session = SessionContext::new("cli", false);
    let outcome = pipeline.run(query, coords, &session).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    if outcome.success {
        if let Some(summary) = &outcome.summary {
            println!("{summary}");
        }
        if let Some(url) = &outcome.url {
            println!("{url}");
        }
        Ok(())
    } else {
        let message = outcome
            .error
            .unwrap_or_else(|| "search could not be resolved".to_owned());
        anyhow::bail!(message)
    }
}

fn nearest(lat: f64, lng: f64, radius_km: f64) {
    match nearest_within(Coordinates::new(lat, lng), radius_km) {
        Some((airport, distance_km)) => {
            println!(
                "{}: {} ({}), {distance_km:.1} km away",
                airport.code, airport.name, airport.municipality
            );
        }
        None => println!("no airport within {radius_km:.0} km"),
    }
}
