//! Command-line front end for the zeromap core.
//!
//! Acts as the composition root: loads configuration, assembles the
//! resolver chain from whichever tiers are configured, and exposes the
//! search and geocoding operations over a JSON places file.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use zeromap_core::{AppConfig, Coordinates, PlaceRecord};
use zeromap_geo::{distance, district, KakaoClient, RelayClient, ResolverChain, ResolverTier};

#[derive(Debug, Parser)]
#[command(name = "zeromap")]
#[command(about = "Seoul zero-waste place search and geocoding")]
struct Cli {
    /// Emit results as JSON instead of human-readable lines.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Rank places from a JSON file against a free-text query.
    Search {
        query: String,
        /// Path to a JSON array of place records.
        #[arg(long)]
        places: PathBuf,
    },
    /// Autocomplete suggestions for a query prefix.
    Suggest {
        query: String,
        #[arg(long)]
        places: PathBuf,
    },
    /// Resolve an address to coordinates through the resolver chain.
    Geocode { address: String },
    /// Resolve one address per line of a file; output order matches input.
    BatchGeocode {
        #[arg(long)]
        addresses: PathBuf,
    },
    /// Reverse-geocode a coordinate pair to a display address.
    ReverseGeocode { latitude: f64, longitude: f64 },
    /// Look up the static district-centroid fallback for an address.
    District { address: String },
    /// Great-circle distance in km between two coordinate pairs.
    Distance {
        lat1: f64,
        lon1: f64,
        lat2: f64,
        lon2: f64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = zeromap_core::load_app_config()?;
    init_tracing(&config.log_level);
    tracing::debug!(?config, "loaded configuration");

    let cli = Cli::parse();
    match cli.command {
        Commands::Search { query, places } => {
            let records = load_places(&places)?;
            let results = zeromap_search::search(&query, &records);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else if results.is_empty() {
                println!("no results");
            } else {
                for result in &results {
                    println!(
                        "{:.3}  {:<7}  {}  ({})",
                        result.relevance,
                        result.match_kind,
                        zeromap_search::highlight(&result.place.name, &query),
                        result.place.address
                    );
                }
            }
        }
        Commands::Suggest { query, places } => {
            let records = load_places(&places)?;
            let suggestions = zeromap_search::suggest(&query, &records);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&suggestions)?);
            } else {
                for suggestion in &suggestions {
                    println!("{suggestion}");
                }
            }
        }
        Commands::Geocode { address } => {
            let chain = build_chain(&config)?;
            let coords = chain.resolve(&address).await;
            print_coordinates(coords, cli.json)?;
        }
        Commands::BatchGeocode { addresses } => {
            let chain = build_chain(&config)?;
            let list = load_addresses(&addresses)?;
            let resolved = if config.batch_concurrency > 1 {
                chain
                    .resolve_batch_concurrent(&list, config.batch_concurrency)
                    .await
            } else {
                chain.resolve_batch(&list).await
            };
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&resolved)?);
            } else {
                for (address, coords) in list.iter().zip(&resolved) {
                    println!("{}\t{}\t{}", address, coords.latitude, coords.longitude);
                }
            }
        }
        Commands::ReverseGeocode {
            latitude,
            longitude,
        } => {
            let client = kakao_client(&config)?;
            let address = client.reverse_geocode(latitude, longitude).await;
            if cli.json {
                println!("{}", serde_json::json!({ "address": address }));
            } else {
                match address {
                    Some(address) => println!("{address}"),
                    None => println!("no address found"),
                }
            }
        }
        Commands::District { address } => {
            let coords = district::simple_address_to_coordinates(&address);
            print_coordinates(coords, cli.json)?;
        }
        Commands::Distance {
            lat1,
            lon1,
            lat2,
            lon2,
        } => {
            let km = distance::haversine_km(
                Coordinates::new(lat1, lon1),
                Coordinates::new(lat2, lon2),
            );
            if cli.json {
                println!("{}", serde_json::json!({ "kilometers": km }));
            } else {
                println!("{km:.3} km");
            }
        }
    }

    Ok(())
}

fn init_tracing(log_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Assembles the resolver chain from the configured tiers. The district
/// table always terminates the chain, so resolution is total even with no
/// provider or relay configured.
fn build_chain(config: &AppConfig) -> anyhow::Result<ResolverChain> {
    let mut tiers = Vec::new();
    if let Some(key) = &config.kakao_api_key {
        tiers.push(ResolverTier::Provider(KakaoClient::new(
            key,
            config.http_timeout_secs,
        )?));
    }
    if let Some(url) = &config.relay_url {
        tiers.push(ResolverTier::Relay(RelayClient::new(
            url,
            config.http_timeout_secs,
        )?));
    }
    Ok(ResolverChain::with_fallback(tiers)
        .retry_policy(config.max_retries, config.retry_backoff_base_ms))
}

fn kakao_client(config: &AppConfig) -> anyhow::Result<KakaoClient> {
    let key = config
        .kakao_api_key
        .as_deref()
        .context("ZEROMAP_KAKAO_API_KEY is not set; reverse geocoding needs the Kakao API")?;
    Ok(KakaoClient::new(key, config.http_timeout_secs)?)
}

fn load_places(path: &Path) -> anyhow::Result<Vec<PlaceRecord>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading places file {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing places file {}", path.display()))
}

fn load_addresses(path: &Path) -> anyhow::Result<Vec<String>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading addresses file {}", path.display()))?;
    Ok(raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect())
}

fn print_coordinates(coords: Coordinates, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(&coords)?);
    } else {
        println!("{} {}", coords.latitude, coords.longitude);
    }
    Ok(())
}
