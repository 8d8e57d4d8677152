mod report;
mod search;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::report::{ReportArg, TallyArg};

#[derive(Debug, Parser)]
#[command(name = "hhvac")]
#[command(about = "Collect hh.ru vacancies into a sheet and report on them")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch vacancies for a query and overwrite the data sheet
    Search {
        /// Free-text search query (e.g., "Python разработчик")
        #[arg(long)]
        query: String,
        /// Keep only vacancies in this city; empty means any city
        #[arg(long, default_value = "")]
        city: String,
        /// Print the run summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write plain-text reports built from the data sheet
    Report {
        #[arg(value_enum)]
        kind: ReportArg,
        /// Sheet column for the rows of an extra pivot table
        #[arg(long, requires = "cols")]
        rows: Option<String>,
        /// Sheet column for the columns of an extra pivot table
        #[arg(long, requires = "rows")]
        cols: Option<String>,
    },
    /// Write markdown tallies built from the data sheet
    Tally {
        #[arg(value_enum)]
        kind: TallyArg,
        /// Query whose technology stack the requirements tally checks
        #[arg(long, default_value = "")]
        query: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = hhvac_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Search { query, city, json } => {
            search::run_search(&config, &query, &city, json).await?;
        }
        Commands::Report { kind, rows, cols } => {
            report::run_report(&config, kind, rows.zip(cols))?;
        }
        Commands::Tally { kind, query } => report::run_tally(&config, kind, &query)?,
    }

    Ok(())
}
