mod commands;
mod logging;
mod render;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ferias_core::config::FeriasConfig;

#[derive(Parser)]
#[command(name = "ferias")]
#[command(about = "Record employee vacations and see them on a calendar")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Vacation service base URL (overrides config and FERIAS_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List vacations of a month
    Month {
        /// Month to show (YYYY-MM), defaults to the current month
        month: Option<String>,

        /// Include vacations that cover the month without starting or ending in it
        #[arg(long)]
        overlap: bool,
    },
    /// Show who is on vacation on a day
    Day {
        /// Day to look up (YYYY-MM-DD)
        date: String,
    },
    /// Record a new vacation
    Add {
        /// Employee name
        #[arg(short, long)]
        name: Option<String>,

        /// First vacation day (YYYY-MM-DD)
        #[arg(short, long)]
        start: Option<String>,

        /// Day the employee is back (YYYY-MM-DD)
        #[arg(short, long = "return")]
        return_date: Option<String>,
    },
    /// Draw a month with vacation days marked
    Calendar {
        /// Month to draw (YYYY-MM), defaults to the current month
        month: Option<String>,
    },
    /// Print the calendar markings as JSON
    Marks {
        /// Only include days of this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the config file location
    Path,
    /// Write a default config file if none exists
    Init,
    /// Print the effective configuration
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let api_url = cli.api_url;

    match cli.command {
        Commands::Month { month, overlap } => {
            let config = load_config(api_url)?;
            commands::month::run(&config, month.as_deref(), overlap).await
        }
        Commands::Day { date } => {
            let config = load_config(api_url)?;
            commands::day::run(&config, &date).await
        }
        Commands::Add {
            name,
            start,
            return_date,
        } => {
            let config = load_config(api_url)?;
            commands::add::run(&config, name, start, return_date).await
        }
        Commands::Calendar { month } => {
            let config = load_config(api_url)?;
            commands::calendar::run(&config, month.as_deref()).await
        }
        Commands::Marks { month } => {
            let config = load_config(api_url)?;
            commands::marks::run(&config, month.as_deref()).await
        }
        Commands::Config { action } => match action {
            ConfigAction::Path => commands::config::path(),
            ConfigAction::Init => commands::config::init(),
            ConfigAction::Show => commands::config::show(&load_config(api_url)?),
        },
    }
}

/// Load config, letting `--api-url` win over file and environment.
fn load_config(api_url: Option<String>) -> Result<FeriasConfig> {
    let mut config = FeriasConfig::load()?;
    if let Some(url) = api_url {
        config.api_url = url;
        config.validate()?;
    }
    Ok(config)
}
