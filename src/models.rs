use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One observation of the daily price series. Immutable once loaded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeAction {
    Buy,
    Sell,
}

impl TradeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeAction::Buy => "buy",
            TradeAction::Sell => "sell",
        }
    }
}

/// One executed simulated trade. Trade logs are append-only and chronological.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub date: NaiveDate,
    pub action: TradeAction,
    pub price: f64,
    pub btc_amount: f64,
    pub usd_amount: f64,
    pub portfolio_value_after: f64,
    pub reason: String,
}

/// Portfolio valuation at one date, for equity-curve rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquityPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Full outcome of one strategy simulation over a filtered series.
///
/// `cash` is populated only by strategies that can hold uninvested USD;
/// HODL and DCA are always fully in BTC and omit it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyResult {
    pub name: String,
    pub final_value: f64,
    pub profit: f64,
    pub profit_percent: f64,
    pub total_invested: f64,
    pub btc_amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cash: Option<f64>,
    pub history: Vec<EquityPoint>,
    pub trades: u32,
    pub trade_history: Vec<Trade>,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feasibility {
    High,
    Medium,
    Low,
}

impl Feasibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Feasibility::High => "high",
            Feasibility::Medium => "medium",
            Feasibility::Low => "low",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Feasibility::High => "High",
            Feasibility::Medium => "Moderate",
            Feasibility::Low => "Low",
        }
    }
}

/// Verdict on whether a target annualized return was historically achievable
/// over the analyzed window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeasibilityAnalysis {
    pub target_years: f64,
    pub target_return: f64,
    pub target_final_value: f64,
    pub required_end_price: f64,
    pub actual_annual_return: f64,
    pub best_annual_return: f64,
    pub feasibility: Feasibility,
    pub feasibility_text: String,
    pub actual_years: f64,
    pub start_price: f64,
    pub end_price: f64,
    pub highest_price: f64,
}
