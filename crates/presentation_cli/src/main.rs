//! Road trip planner CLI
//!
//! Plans multi-day trips and exposes the individual provider lookups for
//! troubleshooting.

#![allow(clippy::print_stdout)]

mod cli;
mod output;

use std::sync::Arc;

use anyhow::Context;
use application::{DirectionsPort, GeocodingPort, IsochronePort, estimate_trip};
use chrono::{Days, Local, NaiveDate};
use clap::Parser;
use infrastructure::{AppConfig, init_tracing, providers};
use tracing::debug;

use crate::cli::{Cli, Commands, log_filter_from_verbosity};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_from(cli.config.as_deref())
        .context("failed to load configuration")?;

    // -v on the command line wins over the configured filter
    if cli.verbose > 0 {
        config.logging.filter = log_filter_from_verbosity(cli.verbose).to_string();
    }
    init_tracing(&config.logging)?;
    debug!(config = ?config, "Configuration loaded");

    match cli.command {
        Commands::Plan {
            from,
            to,
            via,
            daily_limit,
            start_date,
            json,
        } => {
            let planner = providers::road_trip_planner(&config)?;
            let limit = daily_limit.unwrap_or(config.planner.daily_driving_limit_hours);
            let start_date = start_date.unwrap_or_else(today);

            println!("🗺️  Planning {from} → {to} ({limit}h per day, leaving {start_date})");

            let plan = if via.is_empty() {
                planner.plan_road_trip(&from, &to, limit, start_date).await?
            } else {
                let mut addresses = Vec::with_capacity(via.len() + 2);
                addresses.push(from);
                addresses.extend(via);
                addresses.push(to);
                planner.plan_via(&addresses, limit, start_date).await?
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                print!("{}", output::format_plan(&plan));
            }
        },

        Commands::Geocode { address } => {
            let geocoder = providers::geocoder(&config)?;
            let coordinate = geocoder.geocode(&address).await?;
            println!("📍 {address}: {coordinate}");
        },

        Commands::Directions { addresses } => {
            let geocoder = providers::geocoder(&config)?;
            let routing = providers::routing(&config)?;

            let waypoints = geocode_all(geocoder.as_ref(), &addresses).await?;
            let route = routing.directions(&waypoints).await?;
            print!("{}", output::format_route(&route));
        },

        Commands::Stays {
            address,
            check_in,
            check_out,
        } => {
            let check_out = check_out
                .or_else(|| check_in.checked_add_days(Days::new(1)))
                .context("check-in date is out of range")?;

            let geocoder = providers::geocoder(&config)?;
            let routing: Arc<dyn DirectionsPort> = providers::routing(&config)?;
            let stays = providers::stay_aggregator(&config, routing)?;

            let center = geocoder.geocode(&address).await?;
            let found = stays.search_stays(&center, check_in, check_out).await?;

            println!(
                "🏨 {} stays near {address} for {check_in} → {check_out}",
                found.len()
            );
            for stay in &found {
                println!("  {}", output::format_stay(stay));
            }
        },

        Commands::Isochrone { address, hours } => {
            let geocoder = providers::geocoder(&config)?;
            let routing = providers::routing(&config)?;

            let center = geocoder.geocode(&address).await?;
            let isochrones = routing.isochrones(&center, &hours).await?;

            println!("🧭 Reachable from {address}:");
            for isochrone in &isochrones {
                println!("  {}", output::format_isochrone(isochrone));
            }
        },

        Commands::Estimate {
            from,
            to,
            daily_limit,
        } => {
            let geocoder = providers::geocoder(&config)?;
            let routing = providers::routing(&config)?;
            let limit = daily_limit.unwrap_or(config.planner.daily_driving_limit_hours);

            let waypoints = geocode_all(geocoder.as_ref(), &[from.clone(), to.clone()]).await?;
            let route = routing.directions(&waypoints).await?;
            let estimate = estimate_trip(&route, limit, &config.planner.to_rest_policy())?;

            println!("📏 {from} → {to} at {limit}h per day");
            print!("{}", output::format_estimate(&estimate));
        },

        Commands::Config { defaults } => {
            let shown = if defaults {
                AppConfig::default()
            } else {
                config
            };
            print!("{}", toml::to_string_pretty(&shown)?);
        },
    }

    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Resolve addresses one by one, keeping their order
async fn geocode_all(
    geocoder: &dyn GeocodingPort,
    addresses: &[String],
) -> anyhow::Result<Vec<domain::Coordinate>> {
    let mut waypoints = Vec::with_capacity(addresses.len());
    for address in addresses {
        let coordinate = geocoder
            .geocode(address)
            .await
            .with_context(|| format!("could not resolve {address}"))?;
        waypoints.push(coordinate);
    }
    Ok(waypoints)
}
