use crate::config::BacktestConfig;
use crate::models::{EquityPoint, PricePoint, StrategyResult, Trade, TradeAction};

#[derive(Debug, Clone, Copy)]
pub struct Params {
    /// Fractional drawdown from the running high that triggers a buy.
    pub dip_threshold: f64,
    /// Fraction of the remaining cash spent per trigger.
    pub buy_percentage: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            dip_threshold: 0.20,
            buy_percentage: 0.30,
        }
    }
}

/// Contrarian accumulation: start fully in cash and buy a slice of it every
/// time the price sits `dip_threshold` or more below the running high.
///
/// Re-entries are unlimited: N consecutive qualifying points issue N buys
/// against the same unchanged high, so a sustained drawdown keeps deepening
/// the position with ever-smaller cash slices. Cash never increases and the
/// BTC position never shrinks.
pub fn run(
    series: &[PricePoint],
    config: &BacktestConfig,
    params: Params,
) -> Option<StrategyResult> {
    let first = series.first()?;

    let mut cash = config.initial_investment;
    let mut btc_amount = 0.0;
    let total_invested = config.initial_investment;
    let mut highest_price = first.price;
    let mut trades: u32 = 0;

    let mut history = Vec::with_capacity(series.len());
    let mut trade_history = Vec::new();

    for point in series {
        if point.price > highest_price {
            highest_price = point.price;
        }

        let price_change = (point.price - highest_price) / highest_price;

        if price_change <= -params.dip_threshold && cash > 0.0 {
            let buy_amount = cash * params.buy_percentage;
            let buy_btc = buy_amount / point.price;
            btc_amount += buy_btc;
            cash -= buy_amount;
            trades += 1;

            trade_history.push(Trade {
                date: point.date,
                action: TradeAction::Buy,
                price: point.price,
                btc_amount: buy_btc,
                usd_amount: buy_amount,
                portfolio_value_after: btc_amount * point.price + cash,
                reason: format!(
                    "price {:.1}% below the high, buying the dip",
                    (price_change * 100.0).abs()
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
        name: "Buy the Dip".to_string(),
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
            "Hold cash and spend {:.0}% of what is left every time the price drops {:.0}% \
             or more from its high within the range.",
            params.buy_percentage * 100.0,
            params.dip_threshold * 100.0
        ),
    })
}
