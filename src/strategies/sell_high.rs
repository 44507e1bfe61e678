use crate::config::BacktestConfig;
use crate::models::{EquityPoint, PricePoint, StrategyResult, Trade, TradeAction};

#[derive(Debug, Clone, Copy)]
pub struct Params {
    /// Fractional rise over the entry price that triggers a sell.
    pub sell_threshold: f64,
    /// Fraction of the current BTC position sold per trigger.
    pub sell_percentage: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            sell_threshold: 0.30,
            sell_percentage: 0.50,
        }
    }
}

/// Take-profit ladder: full initial buy, then whenever the price sits at
/// least `sell_threshold` above the entry price, sell `sell_percentage` of
/// the remaining position into cash.
///
/// The reference price is the original entry price and is never rebased
/// after a sell. That is strategy intent (contrast with grid trading, which
/// rebases on every action): every qualifying point measures its gain
/// against the same entry, so a sustained rally keeps peeling off halves.
pub fn run(
    series: &[PricePoint],
    config: &BacktestConfig,
    params: Params,
) -> Option<StrategyResult> {
    let first = series.first()?;

    let mut cash = 0.0;
    let mut btc_amount = config.initial_investment / first.price;
    let total_invested = config.initial_investment;
    let last_buy_price = first.price;
    let mut trades: u32 = 1;

    let mut history = Vec::with_capacity(series.len().saturating_sub(1));
    let mut trade_history = vec![Trade {
        date: first.date,
        action: TradeAction::Buy,
        price: first.price,
        btc_amount,
        usd_amount: config.initial_investment,
        portfolio_value_after: config.initial_investment,
        reason: "initial buy".to_string(),
    }];

    for point in &series[1..] {
        let price_change = (point.price - last_buy_price) / last_buy_price;

        if price_change >= params.sell_threshold && btc_amount > 0.0 {
            let sell_amount = btc_amount * params.sell_percentage;
            let sell_value = sell_amount * point.price;
            cash += sell_value;
            btc_amount -= sell_amount;
            trades += 1;

            trade_history.push(Trade {
                date: point.date,
                action: TradeAction::Sell,
                price: point.price,
                btc_amount: sell_amount,
                usd_amount: sell_value,
                portfolio_value_after: btc_amount * point.price + cash,
                reason: format!(
                    "price up {:.1}% from entry, selling {:.0}% to take profit",
                    price_change * 100.0,
                    params.sell_percentage * 100.0
                ),
            });
        }

        history.push(EquityPoint {
            date: point.date,
            value: btc_amount * point.price + cash,
        });
    }

    let end_price = series.last()?.price;
    let final_value = btc_amount * end_price + cash;
    let profit = final_value - total_invested;
    let profit_percent = (final_value / total_invested - 1.0) * 100.0;

    Some(StrategyResult {
        name: "Sell High".to_string(),
        final_value,
        profit,
        profit_percent,
        total_invested,
        btc_amount,
        cash: Some(cash),
        history,
        trades,
        trade_history,
        description: format!(
            "Buy everything up front, then lock in profit by selling {:.0}% of the position \
             whenever the price is {:.0}% or more above the entry price.",
            params.sell_percentage * 100.0,
            params.sell_threshold * 100.0
        ),
    })
}
