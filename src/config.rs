use anyhow::{anyhow, Result};
use chrono::NaiveDate;

/// Caller-validated parameters shared by every strategy run and by the
/// target feasibility analyzer.
#[derive(Debug, Clone, Copy)]
pub struct BacktestConfig {
    pub initial_investment: f64,
    pub dca_amount: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl BacktestConfig {
    /// Rejects invalid parameters before any strategy runs. The engine itself
    /// only signals on an empty filtered series, so range ordering and amount
    /// checks happen here.
    pub fn validate(&self) -> Result<()> {
        if !self.initial_investment.is_finite() || self.initial_investment <= 0.0 {
            return Err(anyhow!(
                "Initial investment must be a positive amount (got {})",
                self.initial_investment
            ));
        }
        if !self.dca_amount.is_finite() || self.dca_amount < 0.0 {
            return Err(anyhow!(
                "Monthly contribution must be zero or positive (got {})",
                self.dca_amount
            ));
        }
        if self.start_date >= self.end_date {
            return Err(anyhow!(
                "Start date {} must be before end date {}",
                self.start_date,
                self.end_date
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> BacktestConfig {
        BacktestConfig {
            initial_investment: 10_000.0,
            dca_amount: 0.0,
            start_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
        }
    }

    #[test]
    fn accepts_valid_parameters() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_investment() {
        let mut c = config();
        c.initial_investment = 0.0;
        assert!(c.validate().is_err());
        c.initial_investment = f64::NAN;
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_negative_contribution() {
        let mut c = config();
        c.dca_amount = -1.0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_inverted_or_empty_range() {
        let mut c = config();
        c.end_date = c.start_date;
        assert!(c.validate().is_err());
    }
}
