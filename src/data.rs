use crate::models::PricePoint;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::{info, warn};
use std::path::Path;

/// Loads a `date,price` CSV price file.
///
/// The first row is treated as a header. Rows with an unparseable date or a
/// non-finite/non-positive price are skipped with a warning rather than
/// failing the whole load, matching how the presentation layer's data feed
/// tolerates stray rows. Columns are positional, so header names do not
/// matter.
pub fn load_price_csv(path: &Path) -> Result<Vec<PricePoint>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open price file {}", path.display()))?;

    let mut points = Vec::new();
    for (index, record) in reader.records().enumerate() {
        // +2: 1-based rows, plus the header.
        let row = index + 2;
        let record = match record {
            Ok(record) => record,
            Err(err) => {
                warn!("Skipping row {}: {}", row, err);
                continue;
            }
        };

        let (Some(raw_date), Some(raw_price)) = (record.get(0), record.get(1)) else {
            warn!("Skipping row {}: expected date and price columns", row);
            continue;
        };

        let date = match NaiveDate::parse_from_str(raw_date, "%Y-%m-%d") {
            Ok(date) => date,
            Err(err) => {
                warn!("Skipping row {} with unparseable date `{}`: {}", row, raw_date, err);
                continue;
            }
        };

        let price = match raw_price.parse::<f64>() {
            Ok(price) if price.is_finite() && price > 0.0 => price,
            Ok(price) => {
                warn!("Skipping row {} with non-positive price {}", row, price);
                continue;
            }
            Err(err) => {
                warn!("Skipping row {} with unparseable price `{}`: {}", row, raw_price, err);
                continue;
            }
        };

        points.push(PricePoint { date, price });
    }

    info!("Loaded {} price points from {}", points.len(), path.display());
    Ok(points)
}
