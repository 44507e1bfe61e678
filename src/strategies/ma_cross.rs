use crate::config::BacktestConfig;
use crate::indicators::moving_average;
use crate::models::{EquityPoint, PricePoint, StrategyResult, Trade, TradeAction};

#[derive(Debug, Clone, Copy)]
pub struct Params {
    pub short_period: usize,
    pub long_period: usize,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            short_period: 7,
            long_period: 30,
        }
    }
}

/// Trend following on moving-average crosses: all-in on a golden cross
/// (short MA crossing above the long MA), all-out on a death cross.
///
/// Cross detection compares the previous index against the current one with
/// inclusive boundaries (`<=` before an upward cross, `>=` before a downward
/// one), so a flat region where the averages are equal still arms the next
/// cross. Reversing those inclusivities would change which point triggers
/// the first entry after a tie, so they must stay as they are.
///
/// Needs at least `long_period` points; with exactly that many the result is
/// valid but the walk never runs, leaving the portfolio entirely in cash.
pub fn run(
    series: &[PricePoint],
    config: &BacktestConfig,
    params: Params,
) -> Option<StrategyResult> {
    if series.len() < params.long_period {
        return None;
    }

    let mut cash = config.initial_investment;
    let mut btc_amount = 0.0;
    let total_invested = config.initial_investment;
    let mut trades: u32 = 0;
    let mut is_holding = false;

    let mut history = Vec::with_capacity(series.len().saturating_sub(params.long_period));
    let mut trade_history = Vec::new();

    for i in params.long_period..series.len() {
        let point = &series[i];

        let short_ma = moving_average(series, i, params.short_period);
        let long_ma = moving_average(series, i, params.long_period);
        let prev_short_ma = moving_average(series, i - 1, params.short_period);
        let prev_long_ma = moving_average(series, i - 1, params.long_period);

        if prev_short_ma <= prev_long_ma && short_ma > long_ma && !is_holding && cash > 0.0 {
            btc_amount = cash / point.price;
            let buy_value = cash;
            cash = 0.0;
            is_holding = true;
            trades += 1;

            trade_history.push(Trade {
                date: point.date,
                action: TradeAction::Buy,
                price: point.price,
                btc_amount,
                usd_amount: buy_value,
                portfolio_value_after: btc_amount * point.price,
                reason: format!(
                    "golden cross: {}-day MA crossed above {}-day MA",
                    params.short_period, params.long_period
                ),
            });
        } else if prev_short_ma >= prev_long_ma && short_ma < long_ma && is_holding && btc_amount > 0.0
        {
            let sell_value = btc_amount * point.price;
            cash = sell_value;
            let sell_btc = btc_amount;
            btc_amount = 0.0;
            is_holding = false;
            trades += 1;

            trade_history.push(Trade {
                date: point.date,
                action: TradeAction::Sell,
                price: point.price,
                btc_amount: sell_btc,
                usd_amount: sell_value,
                portfolio_value_after: cash,
                reason: format!(
                    "death cross: {}-day MA crossed below {}-day MA",
                    params.short_period, params.long_period
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
        name: "MA Cross".to_string(),
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
            "Go all-in when the {}-day average crosses above the {}-day average and all-out \
             when it crosses back below, riding trends and sitting out downturns.",
            params.short_period, params.long_period
        ),
    })
}
