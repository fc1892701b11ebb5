use clap::{Parser, Subcommand};
use selic::simulation::EXPORT_FILENAME;

#[derive(Parser)]
#[command(name = "selic")]
#[command(
    version,
    about = "Selic daily rate history, investment simulation and CSV export"
)]
#[command(
    long_about = "Fetch the daily Selic rate series from the Banco Central SGS API, simulate how a principal compounds over it, and export it as semicolon-separated CSV."
)]
pub struct Cli {
    /// Disable colorized/ANSI output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Output results in JSON format
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Override the SGS series base URL
    #[arg(long = "base-url", global = true, value_name = "URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the raw daily series for a date range
    History {
        /// Start date (DD/MM/YYYY)
        start_date: String,

        /// End date (DD/MM/YYYY)
        end_date: String,
    },

    /// Compound a principal over the daily series for a date range
    Simulate {
        /// Principal to invest (accepts 1000.50 or 1000,50)
        principal: String,

        /// Start date (DD/MM/YYYY)
        start_date: String,

        /// End date (DD/MM/YYYY)
        end_date: String,
    },

    /// Export the daily series for a date range as CSV
    Export {
        /// Start date (DD/MM/YYYY)
        start_date: String,

        /// End date (DD/MM/YYYY)
        end_date: String,

        /// Output file path
        #[arg(short, long, default_value = EXPORT_FILENAME)]
        output: String,
    },

    /// Show the most recent published daily rate
    Latest,
}
