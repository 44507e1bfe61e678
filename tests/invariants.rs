use btc_backtest::config::BacktestConfig;
use btc_backtest::models::{PricePoint, TradeAction};
use btc_backtest::strategy::{run_strategy, StrategyKind};
use chrono::NaiveDate;
use proptest::prelude::*;

fn daily_series(prices: Vec<f64>) -> Vec<PricePoint> {
    let base = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    prices
        .into_iter()
        .enumerate()
        .map(|(i, price)| PricePoint {
            date: base + chrono::Duration::days(i as i64),
            price,
        })
        .collect()
}

fn config_for(series: &[PricePoint], dca_amount: f64) -> BacktestConfig {
    BacktestConfig {
        initial_investment: 10_000.0,
        dca_amount,
        start_date: series.first().unwrap().date,
        end_date: series.last().unwrap().date,
    }
}

fn price_series() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(1.0f64..100_000.0, 2..120)
}

proptest! {
    /// No strategy may short or leverage: the final BTC position and cash
    /// balance are never negative, whatever the price path.
    #[test]
    fn no_strategy_shorts_or_leverages(prices in price_series(), dca in 0.0f64..500.0) {
        let series = daily_series(prices);
        let config = config_for(&series, dca);

        for kind in StrategyKind::ALL {
            let Some(result) = run_strategy(kind, &series, &config) else {
                // Only the MA cross may decline, and only on short series.
                prop_assert_eq!(kind, StrategyKind::MaCross);
                prop_assert!(series.len() < 30);
                continue;
            };

            prop_assert!(result.btc_amount >= 0.0, "{} went short", kind.label());
            if let Some(cash) = result.cash {
                prop_assert!(cash >= 0.0, "{} levered cash", kind.label());
            }
            for point in &result.history {
                prop_assert!(point.value >= 0.0);
            }
        }
    }

    /// Histories are strictly chronological and trade logs never step back
    /// in time.
    #[test]
    fn output_is_chronological(prices in price_series()) {
        let series = daily_series(prices);
        let config = config_for(&series, 100.0);

        for kind in StrategyKind::ALL {
            let Some(result) = run_strategy(kind, &series, &config) else {
                continue;
            };
            for pair in result.history.windows(2) {
                prop_assert!(pair[0].date < pair[1].date);
            }
            for pair in result.trade_history.windows(2) {
                prop_assert!(pair[0].date <= pair[1].date);
            }
            prop_assert_eq!(result.trade_history.len(), result.trades as usize);
        }
    }

    /// DCA with a zero contribution is HODL under another name.
    #[test]
    fn dca_with_zero_contribution_is_hodl(prices in price_series()) {
        let series = daily_series(prices);
        let config = config_for(&series, 0.0);

        let hodl = run_strategy(StrategyKind::Hodl, &series, &config).unwrap();
        let dca = run_strategy(StrategyKind::Dca, &series, &config).unwrap();

        prop_assert_eq!(dca.final_value.to_bits(), hodl.final_value.to_bits());
        prop_assert_eq!(dca.btc_amount.to_bits(), hodl.btc_amount.to_bits());
        prop_assert_eq!(dca.trades, hodl.trades);
    }

    /// Buy-the-dip only ever buys: cash flows one way and the position only
    /// grows.
    #[test]
    fn buy_dip_never_sells(prices in price_series()) {
        let series = daily_series(prices);
        let config = config_for(&series, 0.0);

        let result = run_strategy(StrategyKind::BuyDip, &series, &config).unwrap();
        for trade in &result.trade_history {
            prop_assert_eq!(trade.action, TradeAction::Buy);
        }
        prop_assert!(result.cash.unwrap() <= config.initial_investment);
    }

    /// Sell-high only ever sells after the entry: every post-entry trade
    /// adds to cash.
    #[test]
    fn sell_high_only_sells_after_entry(prices in price_series()) {
        let series = daily_series(prices);
        let config = config_for(&series, 0.0);

        let result = run_strategy(StrategyKind::SellHigh, &series, &config).unwrap();
        for trade in result.trade_history.iter().skip(1) {
            prop_assert_eq!(trade.action, TradeAction::Sell);
        }
    }
}
