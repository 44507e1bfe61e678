use crate::config::BacktestConfig;
use crate::models::{EquityPoint, PricePoint, StrategyResult, Trade, TradeAction};
use chrono::Datelike;

/// Dollar-cost averaging: an initial buy identical to HODL, then a fixed
/// contribution on the first point of every new calendar month.
///
/// The month trigger compares month numbers only (not month + year). Because
/// the remembered month is reassigned on every trigger, it still fires across
/// year wraps; it only stays quiet while consecutive points share a month
/// value. With `dca_amount == 0` the result is numerically identical to HODL
/// apart from its label.
pub fn run(series: &[PricePoint], config: &BacktestConfig) -> Option<StrategyResult> {
    let first = series.first()?;

    let mut total_invested = config.initial_investment;
    let mut btc_amount = config.initial_investment / first.price;
    let mut last_buy_month = first.date.month();
    let mut trades: u32 = 1;

    let mut history = Vec::with_capacity(series.len());
    let mut trade_history = vec![Trade {
        date: first.date,
        action: TradeAction::Buy,
        price: first.price,
        btc_amount,
        usd_amount: config.initial_investment,
        portfolio_value_after: config.initial_investment,
        reason: "initial buy".to_string(),
    }];

    for point in series {
        let current_month = point.date.month();

        if current_month != last_buy_month && config.dca_amount > 0.0 {
            let buy_btc = config.dca_amount / point.price;
            btc_amount += buy_btc;
            total_invested += config.dca_amount;
            last_buy_month = current_month;
            trades += 1;

            trade_history.push(Trade {
                date: point.date,
                action: TradeAction::Buy,
                price: point.price,
                btc_amount: buy_btc,
                usd_amount: config.dca_amount,
                portfolio_value_after: btc_amount * point.price,
                reason: "monthly contribution".to_string(),
            });
        }

        history.push(EquityPoint {
            date: point.date,
            value: btc_amount * point.price,
        });
    }

    let end_price = series.last()?.price;
    let final_value = btc_amount * end_price;
    let profit = final_value - total_invested;
    let profit_percent = (final_value / total_invested - 1.0) * 100.0;

    Some(StrategyResult {
        name: "Dollar-Cost Averaging".to_string(),
        final_value,
        profit,
        profit_percent,
        total_invested,
        btc_amount,
        cash: None,
        history,
        trades,
        trade_history,
        description: format!(
            "After the initial buy, invest {:.0} on the first trading day of every month \
             regardless of price, smoothing the entry cost over time.",
            config.dca_amount
        ),
    })
}
