use anyhow::Context;
use clap::{Parser, Subcommand};
use smhi_core::{Config, Smhi};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "smhi", version, about = "SMHI point forecast CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store a default location for forecast lookups.
    Configure,

    /// Show the forecast for a location, nearest time point first.
    Show {
        /// Longitude, e.g. "16.158". Falls back to the configured default.
        #[arg(long)]
        lon: Option<String>,

        /// Latitude, e.g. "58.5812". Falls back to the configured default.
        #[arg(long)]
        lat: Option<String>,

        /// Number of forecast entries to print.
        #[arg(long, default_value_t = 5)]
        count: usize,

        /// Print the records as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { lon, lat, count, json } => show(lon, lat, count, json).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let longitude = inquire::Text::new("Longitude:").prompt()?;
    let latitude = inquire::Text::new("Latitude:").prompt()?;

    config.set_location(longitude, latitude);
    config.save()?;

    println!("Saved default location to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(
    lon: Option<String>,
    lat: Option<String>,
    count: usize,
    json: bool,
) -> anyhow::Result<()> {
    let (longitude, latitude) = resolve_location(lon, lat)?;

    let smhi = Smhi::new(longitude, latitude);
    let forecasts = smhi.forecasts_async(None).await.context("Failed to fetch forecast")?;

    if json {
        let selected: Vec<_> = forecasts.iter().take(count).collect();
        println!("{}", serde_json::to_string_pretty(&selected)?);
        return Ok(());
    }

    for forecast in forecasts.iter().take(count) {
        println!(
            "{:>4}°C  {:>3}% humidity  {:>4} hPa  {:>3}% clouds  {:>3}% thunder  {}",
            forecast.temperature,
            forecast.humidity,
            forecast.pressure,
            forecast.cloudiness,
            forecast.thunder,
            forecast.symbol_description(),
        );
    }

    Ok(())
}

/// Use explicit flags when both are given, otherwise the stored default.
fn resolve_location(
    lon: Option<String>,
    lat: Option<String>,
) -> anyhow::Result<(String, String)> {
    match (lon, lat) {
        (Some(lon), Some(lat)) => Ok((lon, lat)),
        (None, None) => {
            let config = Config::load()?;
            let location = config.location()?;
            Ok((location.longitude.clone(), location.latitude.clone()))
        }
        _ => anyhow::bail!("Pass both --lon and --lat, or neither."),
    }
}
