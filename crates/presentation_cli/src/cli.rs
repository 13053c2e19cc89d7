//! Command-line arguments

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Road trip planner CLI
#[derive(Debug, Parser)]
#[command(name = "roadtrip-cli")]
#[command(author, version, about = "Plan multi-day road trips with overnight stays", long_about = None)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (default: ./roadtrip.toml if present)
    #[arg(short, long, global = true, env = "ROADTRIP_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Plan a road trip with overnight stays
    ///
    /// Example: roadtrip-cli plan "Bellingham, WA" "Calgary, AB" --daily-limit 6
    Plan {
        /// Start address
        from: String,

        /// Destination address
        to: String,

        /// Intermediate destinations, visited in order
        #[arg(long = "via")]
        via: Vec<String>,

        /// Maximum driving hours per day (default from configuration)
        #[arg(short = 'l', long)]
        daily_limit: Option<f64>,

        /// First day of the trip, YYYY-MM-DD (default: today)
        #[arg(short = 'd', long)]
        start_date: Option<NaiveDate>,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve an address to coordinates
    Geocode {
        /// Address to resolve
        address: String,
    },

    /// Driving directions through two or more addresses
    Directions {
        /// Addresses in driving order
        #[arg(required = true, num_args = 2..)]
        addresses: Vec<String>,
    },

    /// Search rentals and hotels near an address
    Stays {
        /// Address to search around
        address: String,

        /// Check-in date, YYYY-MM-DD
        #[arg(long)]
        check_in: NaiveDate,

        /// Check-out date, YYYY-MM-DD (default: the day after check-in)
        #[arg(long)]
        check_out: Option<NaiveDate>,
    },

    /// Areas reachable within the given driving times
    Isochrone {
        /// Center address
        address: String,

        /// Driving times in hours
        #[arg(long, required = true, num_args = 1..)]
        hours: Vec<f64>,
    },

    /// Estimate driving days and rest breaks between two addresses
    Estimate {
        /// Start address
        from: String,

        /// Destination address
        to: String,

        /// Maximum driving hours per day (default from configuration)
        #[arg(short = 'l', long)]
        daily_limit: Option<f64>,
    },

    /// Print the effective configuration as TOML (API keys are omitted)
    Config {
        /// Print built-in defaults instead of the loaded configuration
        #[arg(long)]
        defaults: bool,
    },
}

/// Determine log filter level from verbosity count
pub const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
