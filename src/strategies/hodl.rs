use crate::config::BacktestConfig;
use crate::models::{EquityPoint, PricePoint, StrategyResult, Trade, TradeAction};

/// Buy-and-hold: the full investment goes in at the first point of the range
/// and nothing else happens until the last.
pub fn run(series: &[PricePoint], config: &BacktestConfig) -> Option<StrategyResult> {
    let first = series.first()?;
    let last = series.last()?;

    let btc_amount = config.initial_investment / first.price;
    let final_value = btc_amount * last.price;
    let profit = final_value - config.initial_investment;
    let profit_percent = (final_value / config.initial_investment - 1.0) * 100.0;

    let history = series
        .iter()
        .map(|point| EquityPoint {
            date: point.date,
            value: btc_amount * point.price,
        })
        .collect();

    let trade_history = vec![Trade {
        date: first.date,
        action: TradeAction::Buy,
        price: first.price,
        btc_amount,
        usd_amount: config.initial_investment,
        portfolio_value_after: config.initial_investment,
        reason: "initial buy".to_string(),
    }];

    Some(StrategyResult {
        name: "HODL".to_string(),
        final_value,
        profit,
        profit_percent,
        total_invested: config.initial_investment,
        btc_amount,
        cash: None,
        history,
        trades: 1,
        trade_history,
        description: "Invest everything on the start date and hold to the end of the range. \
                      Profit comes entirely from price appreciation."
            .to_string(),
    })
}
