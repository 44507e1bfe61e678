use crate::config::BacktestConfig;
use crate::data;
use crate::feasibility;
use crate::series;
use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use log::info;
use std::path::Path;

pub struct FeasibilityArgs {
    pub initial_investment: f64,
    pub target_years: f64,
    pub target_return: f64,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub json: bool,
}

pub fn run(data_file: &Path, args: FeasibilityArgs) -> Result<()> {
    if !args.target_years.is_finite() || args.target_years <= 0.0 {
        return Err(anyhow!(
            "Target horizon must be a positive number of years (got {})",
            args.target_years
        ));
    }

    let points = data::load_price_csv(data_file)?;
    if points.is_empty() {
        return Err(anyhow!("No usable price points in {}", data_file.display()));
    }

    let (start_date, end_date) =
        super::backtest::resolve_date_range(&points, args.start_date, args.end_date);
    let config = BacktestConfig {
        initial_investment: args.initial_investment,
        dca_amount: 0.0,
        start_date,
        end_date,
    };
    config.validate()?;

    let filtered = series::filter_date_range(&points, start_date, end_date);
    info!(
        "Analyzing target over {} to {}: {} points in range",
        start_date,
        end_date,
        filtered.len()
    );

    let analysis = feasibility::analyze(&filtered, &config, args.target_years, args.target_return)
        .ok_or_else(|| {
            anyhow!(
                "Insufficient data: no price points between {} and {}",
                start_date,
                end_date
            )
        })?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    println!(
        "Target: {:.1}%/yr over {:.1} year(s) -> {:.2} (requires end price {:.2})",
        analysis.target_return,
        analysis.target_years,
        analysis.target_final_value,
        analysis.required_end_price
    );
    println!(
        "Window: {} to {} ({:.2} years), price {:.2} -> {:.2} (peak {:.2})",
        start_date,
        end_date,
        analysis.actual_years,
        analysis.start_price,
        analysis.end_price,
        analysis.highest_price
    );
    println!(
        "Realized annual return {:.2}%, best-case {:.2}%",
        analysis.actual_annual_return, analysis.best_annual_return
    );
    println!("Feasibility: {}", analysis.feasibility_text);

    Ok(())
}
