use crate::models::PricePoint;

/// Simple moving average of the `period` prices ending at `end_index`
/// inclusive. Recomputed with a full window scan on each call so the
/// summation order (and therefore the floating-point result) matches the
/// straightforward definition; the daily series are small enough that the
/// O(period) cost per evaluation does not matter.
///
/// Callers must pass a window that fits: `end_index + 1 >= period`.
pub fn moving_average(series: &[PricePoint], end_index: usize, period: usize) -> f64 {
    let start = end_index + 1 - period;
    let sum: f64 = series[start..=end_index].iter().map(|p| p.price).sum();
    sum / period as f64
}

#[cfg(test)]
mod tests {
    use super::moving_average;
    use crate::models::PricePoint;
    use chrono::NaiveDate;

    fn series(prices: &[f64]) -> Vec<PricePoint> {
        let base = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
        prices
            .iter()
            .enumerate()
            .map(|(i, &price)| PricePoint {
                date: base + chrono::Duration::days(i as i64),
                price,
            })
            .collect()
    }

    #[test]
    fn averages_trailing_window() {
        let s = series(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!((moving_average(&s, 4, 3) - 4.0).abs() < 1e-12);
        assert!((moving_average(&s, 2, 3) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn window_of_one_is_the_price() {
        let s = series(&[10.0, 20.0]);
        assert!((moving_average(&s, 1, 1) - 20.0).abs() < 1e-12);
    }
}
