use crate::config::BacktestConfig;
use crate::data;
use crate::models::{PricePoint, StrategyResult};
use crate::series;
use crate::strategy::{self, StrategyKind};
use anyhow::{anyhow, Result};
use chrono::{Datelike, NaiveDate};
use log::{info, warn};
use rayon::prelude::*;
use std::path::Path;

pub struct BacktestArgs {
    pub strategies: Vec<StrategyKind>,
    pub initial_investment: f64,
    pub dca_amount: f64,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub json: bool,
}

pub fn run(data_file: &Path, args: BacktestArgs) -> Result<()> {
    let points = data::load_price_csv(data_file)?;
    if points.is_empty() {
        return Err(anyhow!("No usable price points in {}", data_file.display()));
    }

    let (start_date, end_date) = resolve_date_range(&points, args.start_date, args.end_date);
    let config = BacktestConfig {
        initial_investment: args.initial_investment,
        dca_amount: args.dca_amount,
        start_date,
        end_date,
    };
    config.validate()?;

    let filtered = series::filter_date_range(&points, start_date, end_date);
    info!(
        "Backtesting {} to {}: {} points in range",
        start_date,
        end_date,
        filtered.len()
    );

    let selected: Vec<StrategyKind> = if args.strategies.is_empty() {
        StrategyKind::ALL.to_vec()
    } else {
        args.strategies.clone()
    };

    // The strategies are independent pure functions over the same filtered
    // series, so they fan out cleanly.
    let results: Vec<(StrategyKind, Option<StrategyResult>)> = selected
        .par_iter()
        .map(|&kind| (kind, strategy::run_strategy(kind, &filtered, &config)))
        .collect();

    let mut reported = Vec::new();
    for (kind, result) in results {
        match result {
            Some(result) => reported.push(result),
            None => warn!("{}: insufficient data in the selected range", kind.label()),
        }
    }

    if reported.is_empty() {
        return Err(anyhow!(
            "No strategy produced a result; the range {} to {} holds too little data",
            start_date,
            end_date
        ));
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reported)?);
        return Ok(());
    }

    for result in &reported {
        println!(
            "{:<24} final {:>14.2}  profit {:>14.2} ({:>+8.2}%)  invested {:>12.2}  trades {:>4}",
            result.name,
            result.final_value,
            result.profit,
            result.profit_percent,
            result.total_invested,
            result.trades
        );
    }

    Ok(())
}

/// Fills in missing range bounds the way the original UI seeds its date
/// pickers: the end defaults to the last available date, the start to five
/// years before the end, clamped to the first available date.
pub(crate) fn resolve_date_range(
    points: &[PricePoint],
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> (NaiveDate, NaiveDate) {
    let min_date = points
        .iter()
        .map(|p| p.date)
        .min()
        .expect("Checked points is not empty");
    let max_date = points
        .iter()
        .map(|p| p.date)
        .max()
        .expect("Checked points is not empty");

    let end = end.unwrap_or(max_date);
    let start = start.unwrap_or_else(|| {
        // with_year only fails for Feb 29 landing on a non-leap year.
        let five_years_back = end.with_year(end.year() - 5).unwrap_or_else(|| {
            NaiveDate::from_ymd_opt(end.year() - 5, 2, 28).expect("Feb 28 exists in every year")
        });
        five_years_back.max(min_date)
    });

    (start, end)
}
