use anyhow::Result;
use btc_backtest::commands::{backtest, feasibility};
use btc_backtest::strategy::StrategyKind;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "btc-backtest")]
#[command(about = "Backtests rule-based BTC strategies against a historical price series")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run strategy backtests over a date range
    Backtest {
        /// CSV price file with date,price rows
        #[arg(long = "data-file", value_name = "PATH")]
        data_file: PathBuf,
        /// Strategies to run (defaults to all six)
        #[arg(long = "strategy", value_enum, value_delimiter = ',')]
        strategies: Vec<StrategyKind>,
        /// Initial investment in USD
        #[arg(long, default_value_t = 10_000.0)]
        initial_investment: f64,
        /// Monthly DCA contribution in USD (0 disables contributions)
        #[arg(long, default_value_t = 0.0)]
        dca_amount: f64,
        /// Range start date (defaults to five years before the end date)
        #[arg(long)]
        start_date: Option<NaiveDate>,
        /// Range end date (defaults to the last available date)
        #[arg(long)]
        end_date: Option<NaiveDate>,
        /// Emit the full results as JSON instead of the summary table
        #[arg(long)]
        json: bool,
    },
    /// Check whether a target annual return was historically achievable
    Feasibility {
        /// CSV price file with date,price rows
        #[arg(long = "data-file", value_name = "PATH")]
        data_file: PathBuf,
        /// Initial investment in USD
        #[arg(long, default_value_t = 10_000.0)]
        initial_investment: f64,
        /// Target horizon in years
        #[arg(long)]
        target_years: f64,
        /// Target annual return in percent
        #[arg(long)]
        target_return: f64,
        /// Range start date (defaults to five years before the end date)
        #[arg(long)]
        start_date: Option<NaiveDate>,
        /// Range end date (defaults to the last available date)
        #[arg(long)]
        end_date: Option<NaiveDate>,
        /// Emit the analysis as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    info!("Starting btc-backtest. Historical simulation only; not financial advice.");

    match cli.command {
        Commands::Backtest {
            data_file,
            strategies,
            initial_investment,
            dca_amount,
            start_date,
            end_date,
            json,
        } => backtest::run(
            &data_file,
            backtest::BacktestArgs {
                strategies,
                initial_investment,
                dca_amount,
                start_date,
                end_date,
                json,
            },
        ),
        Commands::Feasibility {
            data_file,
            initial_investment,
            target_years,
            target_return,
            start_date,
            end_date,
            json,
        } => feasibility::run(
            &data_file,
            feasibility::FeasibilityArgs {
                initial_investment,
                target_years,
                target_return,
                start_date,
                end_date,
                json,
            },
        ),
    }
}
