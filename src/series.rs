use crate::models::PricePoint;
use chrono::NaiveDate;

/// Clips the series to `[start, end]` inclusive and sorts ascending by date.
///
/// The input need not be sorted. The result may be empty, which every
/// downstream consumer treats as the "no data in range" signal. The sort is
/// stable, so duplicate dates (which the loader should not produce) keep
/// their input order.
pub fn filter_date_range(
    series: &[PricePoint],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<PricePoint> {
    let mut filtered: Vec<PricePoint> = series
        .iter()
        .copied()
        .filter(|point| point.date >= start && point.date <= end)
        .collect();
    filtered.sort_by(|a, b| a.date.cmp(&b.date));
    filtered
}

#[cfg(test)]
mod tests {
    use super::filter_date_range;
    use crate::models::PricePoint;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn filters_and_sorts_unordered_input() {
        let series = vec![
            PricePoint {
                date: date(2021, 3, 1),
                price: 300.0,
            },
            PricePoint {
                date: date(2021, 1, 1),
                price: 100.0,
            },
            PricePoint {
                date: date(2021, 2, 1),
                price: 200.0,
            },
            PricePoint {
                date: date(2020, 12, 31),
                price: 90.0,
            },
        ];

        let filtered = filter_date_range(&series, date(2021, 1, 1), date(2021, 2, 28));
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].date, date(2021, 1, 1));
        assert_eq!(filtered[1].date, date(2021, 2, 1));
    }

    #[test]
    fn bounds_are_inclusive() {
        let series = vec![
            PricePoint {
                date: date(2021, 1, 1),
                price: 100.0,
            },
            PricePoint {
                date: date(2021, 1, 31),
                price: 110.0,
            },
        ];

        let filtered = filter_date_range(&series, date(2021, 1, 1), date(2021, 1, 31));
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn empty_when_no_points_in_range() {
        let series = vec![PricePoint {
            date: date(2021, 1, 1),
            price: 100.0,
        }];

        let filtered = filter_date_range(&series, date(2022, 1, 1), date(2022, 12, 31));
        assert!(filtered.is_empty());
    }
}
