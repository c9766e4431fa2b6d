//! Geocoder CLI
//!
//! Command-line front end for resolving addresses to coordinates.

#![allow(clippy::print_stdout)]

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use integration_geocoding::{AddressGeocoder, GeocoderConfig, NominatimGeocoder};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Geocoder CLI
#[derive(Parser)]
#[command(name = "geocoder-cli")]
#[command(author, version, about = "Resolve addresses to coordinates", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up the coordinates of an address
    ///
    /// Prints the first match. Exits with status 1 when nothing was found
    /// or the lookup failed.
    /// Example: geocoder-cli geocode "1600 Pennsylvania Ave"
    Geocode {
        /// Free-form address to resolve
        address: String,

        /// Base URL of the Nominatim service
        #[arg(long)]
        base_url: Option<String>,

        /// Request timeout in seconds
        #[arg(long)]
        timeout_secs: Option<u64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Apply command-line overrides on top of the default configuration
fn build_config(base_url: Option<String>, timeout_secs: Option<u64>) -> GeocoderConfig {
    let mut config = GeocoderConfig::default();
    if let Some(base_url) = base_url {
        config.base_url = base_url;
    }
    if let Some(timeout_secs) = timeout_secs {
        config.timeout_secs = timeout_secs;
    }
    config
}

/// Geocode an address and render the match, if any
async fn lookup(
    geocoder: &dyn AddressGeocoder,
    address: &str,
    json: bool,
) -> anyhow::Result<Option<String>> {
    let Some(result) = geocoder.geocode(address).await else {
        return Ok(None);
    };

    let rendered = if json {
        serde_json::to_string_pretty(&result)?
    } else {
        result.to_string()
    };
    Ok(Some(rendered))
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = log_filter_from_verbosity(cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Geocode {
            address,
            base_url,
            timeout_secs,
            json,
        } => {
            let config = build_config(base_url, timeout_secs);
            debug!(base_url = %config.base_url, "Using geocoding service");

            let geocoder = NominatimGeocoder::new(&config)?;

            match lookup(&geocoder, &address, json).await? {
                Some(output) => {
                    println!("{output}");
                    Ok(ExitCode::SUCCESS)
                },
                None => {
                    println!("No result for \"{address}\"");
                    Ok(ExitCode::FAILURE)
                },
            }
        },
    }
}
