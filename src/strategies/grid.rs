use crate::config::BacktestConfig;
use crate::models::{EquityPoint, PricePoint, StrategyResult, Trade, TradeAction};

#[derive(Debug, Clone, Copy)]
pub struct Params {
    /// Fractional move from the last action price that triggers a trade.
    pub grid_percentage: f64,
    /// Fraction of the BTC position (sells) or cash (buys) traded per trigger.
    pub trade_percentage: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            grid_percentage: 0.10,
            trade_percentage: 0.20,
        }
    }
}

/// Trailing grid: open with a 50/50 cash/BTC split, then sell a slice on a
/// `grid_percentage` rise and buy a slice on a `grid_percentage` fall,
/// measured from the price of the last executed action.
///
/// Rebasing the reference on every action makes this an adaptive grid that
/// follows the price rather than a ladder of fixed absolute levels. The two
/// branches are an else-if chain, so one point can never trigger both a sell
/// and a buy.
pub fn run(
    series: &[PricePoint],
    config: &BacktestConfig,
    params: Params,
) -> Option<StrategyResult> {
    let first = series.first()?;

    let mut cash = config.initial_investment * 0.5;
    let mut btc_amount = (config.initial_investment * 0.5) / first.price;
    let total_invested = config.initial_investment;
    let mut last_action_price = first.price;
    let mut trades: u32 = 1;

    let mut history = Vec::with_capacity(series.len().saturating_sub(1));
    let mut trade_history = vec![Trade {
        date: first.date,
        action: TradeAction::Buy,
        price: first.price,
        btc_amount,
        usd_amount: config.initial_investment * 0.5,
        portfolio_value_after: config.initial_investment,
        reason: "initial 50/50 split".to_string(),
    }];

    for point in &series[1..] {
        let price_change = (point.price - last_action_price) / last_action_price;

        if price_change >= params.grid_percentage && btc_amount > 0.0 {
            let sell_amount = btc_amount * params.trade_percentage;
            let sell_value = sell_amount * point.price;
            cash += sell_value;
            btc_amount -= sell_amount;
            last_action_price = point.price;
            trades += 1;

            trade_history.push(Trade {
                date: point.date,
                action: TradeAction::Sell,
                price: point.price,
                btc_amount: sell_amount,
                usd_amount: sell_value,
                portfolio_value_after: btc_amount * point.price + cash,
                reason: format!("grid sell: price up {:.1}%", price_change * 100.0),
            });
        } else if price_change <= -params.grid_percentage && cash > 0.0 {
            let buy_amount = cash * params.trade_percentage;
            let buy_btc = buy_amount / point.price;
            btc_amount += buy_btc;
            cash -= buy_amount;
            last_action_price = point.price;
            trades += 1;

            trade_history.push(Trade {
                date: point.date,
                action: TradeAction::Buy,
                price: point.price,
                btc_amount: buy_btc,
                usd_amount: buy_amount,
                portfolio_value_after: btc_amount * point.price + cash,
                reason: format!("grid buy: price down {:.1}%", (price_change * 100.0).abs()),
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
        name: "Grid Trading".to_string(),
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
            "Start half in cash and half in BTC, then sell {:.0}% of the position on every \
             {:.0}% rise and buy with {:.0}% of the cash on every {:.0}% fall, re-anchoring \
             after each trade.",
            params.trade_percentage * 100.0,
            params.grid_percentage * 100.0,
            params.trade_percentage * 100.0,
            params.grid_percentage * 100.0
        ),
    })
}
